use crate::*;

use directory::DirectoryError;
use rstest::rstest;

#[rstest]
fn users_empty_if_no_user_added(env: TestEnvironment) {
    assert!(env.get_all().is_empty());
}

#[rstest]
fn single_user_added(mut env: TestEnvironment) {
    env.add(ivan());
    assert_eq!(env.get_all(), &[ivan()]);
}

#[rstest]
fn users_size_if_user_added(mut env: TestEnvironment) {
    env.add(ivan());
    env.add(petr());

    let users = env.get_all();

    assert_eq!(users.len(), 2);
    assert_eq!(users, &[ivan(), petr()]);
}

#[rstest]
fn users_added_together_keep_order(mut env: TestEnvironment) {
    env.add_all([petr(), ivan()]);
    assert_eq!(env.get_all(), &[petr(), ivan()]);
}

#[rstest]
fn users_converted_to_map_by_id(mut env: TestEnvironment) {
    env.add_all([ivan(), petr()]);

    let users = env.get_all_converted_by_id();

    let mut ids: Vec<_> = users.keys().copied().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![ivan().id, petr().id]);
    assert_eq!(users[&ivan().id], ivan());
    assert_eq!(users[&petr().id], petr());
}

#[rstest]
fn should_delete_existed_user(mut env: TestEnvironment) {
    env.add(ivan());

    let delete_result = env.delete(ivan().id).unwrap();
    env.delete(ivan().id).unwrap();
    env.delete(ivan().id).unwrap();

    assert!(delete_result);
    assert_eq!(env.dao().calls(), &[1, 1, 1]);
    assert_eq!(env.dao().last_call(), Some(ivan().id));
}

#[rstest]
#[case(true)]
#[case(false)]
fn delete_returns_store_answer(mut env: TestEnvironment, #[case] answer: bool) {
    env.dao_mut().answer(petr().id, answer);
    assert_eq!(env.delete(petr().id).unwrap(), answer);
    assert_eq!(env.dao().calls(), &[petr().id]);
}

#[rstest]
fn delete_unknown_user_uses_default_answer(mut env: TestEnvironment) {
    assert!(!env.delete(42).unwrap());
}

#[rstest]
fn throw_error_if_database_is_not_available(mut env: TestEnvironment) {
    env.dao_mut().fail(ivan().id);

    let err = env.delete(ivan().id).unwrap_err();

    assert!(matches!(err, DirectoryError::Collaborator(_)));
    assert_eq!(
        err.to_string(),
        "database is not available while deleting user 1"
    );
    if let DirectoryError::Collaborator(err) = err {
        assert_eq!(
            err.downcast_ref::<DatabaseUnavailable>(),
            Some(&DatabaseUnavailable { id: 1 })
        );
    }
}

#[rstest]
fn delete_does_not_touch_directory(mut env: TestEnvironment) {
    env.add_all([ivan(), petr()]);
    env.delete(ivan().id).unwrap();
    assert_eq!(env.len(), 2);
}
