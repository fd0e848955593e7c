use super::*;

#[test]
fn new_scope_is_open() {
    let scope = TaskScope::new();
    assert!(scope.handle().is_live());
}

#[test]
fn closing_scope_invalidates_existing_handles() {
    let scope = TaskScope::new();
    let handle = scope.handle();
    assert_eq!(handle.keep(7), Some(7));

    scope.close();
    assert!(!handle.is_live());
    assert_eq!(handle.keep(7), None);
}

#[test]
fn close_is_idempotent_and_shared_across_clones() {
    let scope = TaskScope::default();
    let cloned = scope.clone();
    cloned.close();
    cloned.close();
    assert!(!scope.handle().is_live());
}
