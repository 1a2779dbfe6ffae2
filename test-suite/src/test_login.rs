use crate::*;

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use directory::DirectoryError;
use rstest::rstest;

#[rstest]
fn login_fail_if_password_is_not_correct(mut env: TestEnvironment) {
    env.add(ivan());

    let maybe_user = env.login(Some(ivan().username.as_str()), Some("dummy")).unwrap();

    assert!(maybe_user.is_none());
}

#[rstest]
fn login_fail_if_user_does_not_exist(
    mut env: TestEnvironment,
    #[values(1, 2, 3, 4, 5)] _repetition: u32,
) {
    env.add(ivan());

    let maybe_user = env.login(Some("dummy"), Some(ivan().password.as_str())).unwrap();

    assert!(maybe_user.is_none());
}

#[rstest]
fn login_success_if_user_exists(mut env: TestEnvironment) {
    env.add(ivan());

    let maybe_user = env
        .login(Some(ivan().username.as_str()), Some(ivan().password.as_str()))
        .unwrap();

    assert_eq!(maybe_user, Some(&ivan()));
}

#[rstest]
#[case(None, Some("dummy"))]
#[case(Some("dummy"), None)]
fn throw_error_if_username_or_password_is_null(
    mut env: TestEnvironment,
    #[case] username: Option<&str>,
    #[case] password: Option<&str>,
) {
    env.add(ivan());

    let err = env.login(username, password).unwrap_err();

    assert!(matches!(err, DirectoryError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "username or password is null");
}

#[rstest]
#[case("Ivan", "123", Some(ivan()))]
#[case("Petr", "111", Some(petr()))]
#[case("Petr", "dummy", None)]
#[case("dummy", "123", None)]
fn login_parameterized(
    mut env: TestEnvironment,
    #[case] username: &str,
    #[case] password: &str,
    #[case] user: Option<User>,
) {
    env.add_all([ivan(), petr()]);

    let maybe_user = env.login(Some(username), Some(password)).unwrap();

    assert_eq!(maybe_user, user.as_ref());
}

#[rstest]
fn check_login_functionality_performance(env: TestEnvironment) {
    let mut directory = env.into_directory();
    directory.add_all([ivan(), petr()]);
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = directory
            .login(Some("dummy"), Some(ivan().password.as_str()))
            .map(|user| user.cloned());
        // The receiver is gone once the deadline passed
        let _ = tx.send(result);
    });

    let result = match rx.recv_timeout(Duration::from_millis(200)) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => panic!("login did not finish within 200ms"),
        Err(RecvTimeoutError::Disconnected) => panic!("login thread panicked"),
    };
    assert!(result.unwrap().is_none());
}
