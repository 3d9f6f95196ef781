// Tests for the fix loop: convergence, interaction of both rules, idempotence.

use lift_core::config::LiftConfig;

use super::common;

const SERVICE: &str = "import { db } from './db';

export interface User {
  id: string;
  name: string;
}

export async function createUser({ name, email }: { name: string; email: string }): Promise<{ user: User }> {
  const user = await db.insert({ name, email });
  return { user };
}

export const findUsers = (query: { limit: number } & { offset: number }) => db.find(query);
";

#[test]
/// A realistic module converges and a second run finds nothing.
fn test_service_module_converges() {
    let first = common::fix(SERVICE);
    assert!(first.remaining.is_empty(), "left: {:?}", first.remaining);
    assert!(first.passes >= 2);

    let second = common::fix(&first.output);
    assert_eq!(second.output, first.output);
    assert_eq!(second.passes, 0);
}

#[test]
/// The expected shape of the converged module.
fn test_service_module_output() {
    let fixed = common::fix(SERVICE);
    assert_eq!(
        fixed.output,
        "import { db } from './db';

export interface User {
  id: string;
  name: string;
}

interface CreateUserPayload { name: string; email: string }

interface CreateUserGeneric { user: User }

export async function createUser(payload: CreateUserPayload): Promise<CreateUserGeneric> {
\tconst { name, email } = payload;

  const user = await db.insert({ name, email });
  return { user };
}

interface FindUsersPayload {limit: number,offset: number,}

export const findUsers = (query: FindUsersPayload) => db.find(query);
"
    );
}

#[test]
/// With the pass limit at one the merge happens but the lift waits.
fn test_pass_limit() {
    let config = LiftConfig {
        max_fix_passes: 1,
        ..LiftConfig::default()
    };
    let fixed = common::fix_with("type T = {a: number} & {b: string} & U;", config);
    assert_eq!(fixed.output, "type T = {a: number,b: string,} & U;");
    assert_eq!(fixed.passes, 1);
    assert_eq!(fixed.remaining.len(), 1);
}
