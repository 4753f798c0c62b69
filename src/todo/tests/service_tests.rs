//! Service orchestration tests for todo CRUD.

use super::fixtures::{TestService, alice, bob, buy_milk, scoped_service};
use crate::todo::{
    domain::{Todo, TodoContent, TodoDomainError, TodoDraft, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
    services::{TodoService, TodoServiceError, TodoWriteRequest},
};
use crate::identity::domain::UserId;
use async_trait::async_trait;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn service() -> TestService {
    scoped_service()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips(service: TestService) {
    let user = alice();
    let request = buy_milk().with_description("Semi-skimmed");

    let created = service
        .create(Some(&user), request)
        .await
        .expect("creation should succeed");
    let fetched = service
        .get(Some(&user), created.id())
        .await
        .expect("scoped lookup should succeed");

    assert_eq!(fetched, created);
    assert_eq!(fetched.owner_id(), user.id());
    assert_eq!(fetched.title().as_str(), "Buy milk");
    assert_eq!(fetched.description(), Some("Semi-skimmed"));
    assert_eq!(fetched.priority().value(), 3);
    assert!(!fetched.complete());
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(7)]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_out_of_range_priority(service: TestService, #[case] priority: i32) {
    let user = alice();
    let request = TodoWriteRequest::new("Buy milk", priority, false);

    let result = service.create(Some(&user), request).await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Domain(
            TodoDomainError::PriorityOutOfRange(p)
        )) if p == priority
    ));
    let mine = service
        .list_mine(Some(&user))
        .await
        .expect("listing should succeed");
    assert!(mine.is_empty(), "rejected input must not reach the store");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_empty_title(service: TestService) {
    let user = alice();
    let request = TodoWriteRequest::new("   ", 3, false);

    let result = service.create(Some(&user), request).await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Domain(TodoDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_require_an_identity(service: TestService) {
    let id = TodoId::new(1);

    assert!(matches!(
        service.list_mine(None).await,
        Err(TodoServiceError::Unauthenticated)
    ));
    assert!(matches!(
        service.get(None, id).await,
        Err(TodoServiceError::Unauthenticated)
    ));
    assert!(matches!(
        service.create(None, buy_milk()).await,
        Err(TodoServiceError::Unauthenticated)
    ));
    assert!(matches!(
        service.update(None, id, buy_milk()).await,
        Err(TodoServiceError::Unauthenticated)
    ));
    assert!(matches!(
        service.delete(None, id).await,
        Err(TodoServiceError::Unauthenticated)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_fields_and_preserves_identity(service: TestService) {
    let user = alice();
    let created = service
        .create(Some(&user), buy_milk().with_description("Semi-skimmed"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            Some(&user),
            created.id(),
            TodoWriteRequest::new("Buy milk and eggs", 5, true),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.owner_id(), user.id());
    assert_eq!(updated.title().as_str(), "Buy milk and eggs");
    assert_eq!(updated.priority().value(), 5);
    assert!(updated.complete());
    assert_eq!(
        updated.description(),
        None,
        "update is a full overwrite, an omitted description clears the stored one"
    );

    let fetched = service
        .get(Some(&user), created.id())
        .await
        .expect("scoped lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_validation_failure_leaves_record_untouched(service: TestService) {
    let user = alice();
    let created = service
        .create(Some(&user), buy_milk())
        .await
        .expect("creation should succeed");

    let result = service
        .update(
            Some(&user),
            created.id(),
            TodoWriteRequest::new("Buy milk", 9, true),
        )
        .await;

    assert!(matches!(result, Err(TodoServiceError::Domain(_))));
    let fetched = service
        .get(Some(&user), created.id())
        .await
        .expect("scoped lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_record_yields_not_found(service: TestService) {
    let user = alice();

    let result = service
        .update(Some(&user), TodoId::new(404), buy_milk())
        .await;

    assert!(matches!(
        result,
        Err(TodoServiceError::NotFound(id)) if id == TodoId::new(404)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_once_then_yields_not_found(service: TestService) {
    let user = alice();
    let created = service
        .create(Some(&user), buy_milk())
        .await
        .expect("creation should succeed");

    service
        .delete(Some(&user), created.id())
        .await
        .expect("first delete should succeed");

    let second = service.delete(Some(&user), created.id()).await;
    assert!(matches!(
        second,
        Err(TodoServiceError::NotFound(id)) if id == created.id()
    ));

    let lookup = service.get(Some(&user), created.id()).await;
    assert!(matches!(lookup, Err(TodoServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_mine_returns_only_own_records(service: TestService) {
    let first_user = alice();
    let second_user = bob();

    let mine = service
        .create(Some(&first_user), buy_milk())
        .await
        .expect("creation should succeed");
    service
        .create(Some(&second_user), TodoWriteRequest::new("Walk dog", 2, false))
        .await
        .expect("creation should succeed");

    let listed = service
        .list_mine(Some(&first_user))
        .await
        .expect("listing should succeed");

    assert_eq!(listed, vec![mine]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_store_assigned_and_distinct(service: TestService) {
    let user = alice();

    let first = service
        .create(Some(&user), buy_milk())
        .await
        .expect("creation should succeed");
    let second = service
        .create(Some(&user), TodoWriteRequest::new("Walk dog", 2, false))
        .await
        .expect("creation should succeed");

    assert_ne!(first.id(), second.id());
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TodoRepository for Repo {
        async fn insert(&self, draft: &TodoDraft) -> TodoRepositoryResult<Todo>;
        async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>>;
        async fn list_by_owner(&self, owner_id: UserId) -> TodoRepositoryResult<Vec<Todo>>;
        async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;
        async fn find_owned(
            &self,
            owner_id: UserId,
            id: TodoId,
        ) -> TodoRepositoryResult<Option<Todo>>;
        async fn update_owned(
            &self,
            owner_id: UserId,
            id: TodoId,
            content: &TodoContent,
        ) -> TodoRepositoryResult<Option<Todo>>;
        async fn delete_owned(&self, owner_id: UserId, id: TodoId) -> TodoRepositoryResult<bool>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failures_propagate_as_repository_errors() {
    let mut repository = MockRepo::new();
    repository.expect_insert().returning(|_| {
        Err(TodoRepositoryError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });
    let failing = TodoService::new(Arc::new(repository));
    let user = alice();

    let result = failing.create(Some(&user), buy_milk()).await;

    assert!(matches!(result, Err(TodoServiceError::Repository(_))));
}
