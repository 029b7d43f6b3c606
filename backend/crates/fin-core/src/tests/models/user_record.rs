use crate::{NewUser, UserRecord};

use googletest::prelude::*;

#[test]
fn given_new_user_when_materialized_then_gets_fresh_id_and_whole_second_timestamp() {
    let new_user = NewUser::provisioned("a@x.com");

    let first = UserRecord::from_new_user(&new_user);
    let second = UserRecord::from_new_user(&new_user);

    assert_that!(first.id, not(eq(second.id)));
    assert_that!(first.created_at.timestamp_subsec_nanos(), eq(0));
    assert_that!(first.email, eq("a@x.com"));
}
