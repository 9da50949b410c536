use std::sync::Arc;

mod support;

use slugkit::domain::errors::DomainError;
use slugkit::domain::slug::entity::NewSlugClaim;
use slugkit::domain::slug::repository::SlugUniquenessIndex;
use slugkit::domain::slug::services::{ReservationPolicy, SlugReservationService};
use slugkit::domain::slug::value_objects::{OwnerId, Scope, Slug};
use slugkit::infrastructure::repositories::InMemorySlugIndex;
use support::FixedClock;

fn scope() -> Scope {
    Scope::new("articles").unwrap()
}

fn slug(value: &str) -> Slug {
    Slug::new(value).unwrap()
}

fn owner(id: i64) -> OwnerId {
    OwnerId::new(id).unwrap()
}

fn service(index: &Arc<InMemorySlugIndex>) -> SlugReservationService {
    SlugReservationService::new(
        Arc::clone(index) as Arc<dyn SlugUniquenessIndex>,
        Arc::new(FixedClock::new()),
    )
}

async fn prefill(index: &InMemorySlugIndex, slug_value: &str, owner_id: i64) {
    index
        .claim(NewSlugClaim {
            scope: scope(),
            slug: slug(slug_value),
            owner: owner(owner_id),
            claimed_at: FixedClock::default_instant(),
        })
        .await
        .expect("prefill claim should succeed");
}

#[tokio::test]
async fn unused_base_is_returned_unchanged() {
    let index = Arc::new(InMemorySlugIndex::new());
    let claim = service(&index)
        .reserve(&scope(), &slug("post"), owner(1))
        .await
        .unwrap();

    assert_eq!(claim.slug.as_str(), "post");
    assert_eq!(claim.owner, owner(1));
    assert_eq!(claim.claimed_at, FixedClock::default_instant());
}

#[tokio::test]
async fn taken_base_gets_suffix_two() {
    let index = Arc::new(InMemorySlugIndex::new());
    prefill(&index, "post", 1).await;

    let claim = service(&index)
        .reserve(&scope(), &slug("post"), owner(2))
        .await
        .unwrap();

    assert_eq!(claim.slug.as_str(), "post-2");
}

#[tokio::test]
async fn suffixes_skip_to_smallest_unused() {
    let index = Arc::new(InMemorySlugIndex::new());
    prefill(&index, "post", 1).await;
    prefill(&index, "post-2", 2).await;

    let claim = service(&index)
        .reserve(&scope(), &slug("post"), owner(3))
        .await
        .unwrap();

    assert_eq!(claim.slug.as_str(), "post-3");
}

#[tokio::test]
async fn owner_reclaiming_its_slug_is_a_no_op() {
    let index = Arc::new(InMemorySlugIndex::new());
    let svc = service(&index);

    let first = svc.reserve(&scope(), &slug("post"), owner(1)).await.unwrap();
    let second = svc.reserve(&scope(), &slug("post"), owner(1)).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn released_slug_becomes_reusable() {
    let index = Arc::new(InMemorySlugIndex::new());
    let svc = service(&index);

    prefill(&index, "post", 1).await;
    assert!(index.release(&scope(), &slug("post")).await.unwrap());

    let claim = svc.reserve(&scope(), &slug("post"), owner(2)).await.unwrap();
    assert_eq!(claim.slug.as_str(), "post");
}

#[tokio::test]
async fn scopes_do_not_share_claims() {
    let index = Arc::new(InMemorySlugIndex::new());
    let svc = service(&index);
    let profiles = Scope::new("community-profiles").unwrap();

    let article = svc.reserve(&scope(), &slug("post"), owner(1)).await.unwrap();
    let profile = svc.reserve(&profiles, &slug("post"), owner(2)).await.unwrap();

    assert_eq!(article.slug.as_str(), "post");
    assert_eq!(profile.slug.as_str(), "post");
}

#[tokio::test]
async fn exhaustion_after_retry_ceiling() {
    let index = Arc::new(InMemorySlugIndex::new());
    prefill(&index, "post", 1).await;
    prefill(&index, "post-2", 2).await;
    prefill(&index, "post-3", 3).await;

    let svc = service(&index).with_policy(ReservationPolicy { max_attempts: 3 });
    let err = svc
        .reserve(&scope(), &slug("post"), owner(9))
        .await
        .unwrap_err();

    match err {
        DomainError::Exhausted {
            scope,
            base,
            attempts,
        } => {
            assert_eq!(scope, "articles");
            assert_eq!(base, "post");
            assert_eq!(attempts, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_reservations_get_distinct_slugs() {
    let index = Arc::new(InMemorySlugIndex::new());
    let svc = Arc::new(service(&index));

    let a = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move { svc.reserve(&scope(), &slug("post"), owner(1)).await })
    };
    let b = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move { svc.reserve(&scope(), &slug("post"), owner(2)).await })
    };

    let first = a.await.unwrap().unwrap();
    let second = b.await.unwrap().unwrap();

    let mut slugs = vec![first.slug.into_inner(), second.slug.into_inner()];
    slugs.sort();
    assert_eq!(slugs, vec!["post".to_string(), "post-2".to_string()]);
}
