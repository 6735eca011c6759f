//! Integration tests for `DieselDeveloperRepository` against PostgreSQL.
//!
//! Set `DMAKER_TEST_DATABASE_URL` to a disposable database to run them; the
//! suite prints a skip marker and passes when it is unset. Every test uses
//! fresh member ids so tests can share one database and run in parallel.

use dmaker::domain::ports::{DeveloperPersistenceError, DeveloperRepository, DeveloperStoreHealth};
use dmaker::domain::{
    Age, Developer, DeveloperLevel, DeveloperName, DeveloperSkillType, EmploymentStatus,
    ExperienceYears, MemberId,
};
use dmaker::outbound::persistence::{DbPool, DieselDeveloperRepository, PoolConfig, run_migrations};
use rstest::rstest;
use tokio::sync::OnceCell;
use uuid::Uuid;

const DATABASE_URL_VAR: &str = "DMAKER_TEST_DATABASE_URL";

static MIGRATED: OnceCell<()> = OnceCell::const_new();

#[expect(clippy::print_stderr, reason = "skip marker for unconfigured environments")]
fn database_url() -> Option<String> {
    let url = std::env::var(DATABASE_URL_VAR).ok();
    if url.is_none() {
        eprintln!("SKIP-TEST-DATABASE: {DATABASE_URL_VAR} is not set");
    }
    url
}

async fn repository() -> Option<DieselDeveloperRepository> {
    let url = database_url()?;
    MIGRATED
        .get_or_try_init(|| run_migrations(&url))
        .await
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds");
    Some(DieselDeveloperRepository::new(pool))
}

fn unique_member_id() -> MemberId {
    let suffix = Uuid::new_v4().simple().to_string();
    MemberId::new(format!("it-{suffix}")).expect("valid member id")
}

fn junior(member_id: MemberId) -> Developer {
    Developer::hire(
        member_id,
        DeveloperName::new("Katherine Johnson").expect("valid name"),
        Age::new(29).expect("valid age"),
        DeveloperLevel::Junior,
        DeveloperSkillType::FrontEnd,
        ExperienceYears::new(3),
    )
}

#[rstest]
#[tokio::test]
async fn create_then_find_round_trips() {
    let Some(repo) = repository().await else {
        return;
    };
    let developer = junior(unique_member_id());

    let created = repo.create(&developer).await.expect("create succeeds");
    let found = repo
        .find_by_member_id(&developer.member_id)
        .await
        .expect("lookup succeeds");

    assert_eq!(created, developer);
    assert_eq!(found, Some(developer));
}

#[rstest]
#[tokio::test]
async fn duplicate_creates_map_to_duplicate_member_id() {
    let Some(repo) = repository().await else {
        return;
    };
    let developer = junior(unique_member_id());
    repo.create(&developer).await.expect("first create succeeds");

    let err = repo
        .create(&developer)
        .await
        .expect_err("second create conflicts");

    assert_eq!(
        err,
        DeveloperPersistenceError::duplicate_member_id(developer.member_id.as_ref())
    );
}

#[rstest]
#[tokio::test]
async fn save_updates_an_existing_row() {
    let Some(repo) = repository().await else {
        return;
    };
    let mut developer = junior(unique_member_id());
    repo.create(&developer).await.expect("create succeeds");

    developer.reassign(
        DeveloperLevel::Senior,
        DeveloperSkillType::FullStack,
        ExperienceYears::new(11),
    );
    let saved = repo.save(&developer).await.expect("save succeeds");

    assert_eq!(saved, developer);
}

#[rstest]
#[tokio::test]
async fn retired_developers_leave_the_employed_listing() {
    let Some(repo) = repository().await else {
        return;
    };
    let stays = junior(unique_member_id());
    let mut leaves = junior(unique_member_id());
    repo.create(&stays).await.expect("create succeeds");
    repo.create(&leaves).await.expect("create succeeds");

    let record = leaves.retire();
    let retired = repo.retire(&leaves, &record).await.expect("retire succeeds");
    let employed = repo
        .find_all_by_status(EmploymentStatus::Employed)
        .await
        .expect("listing succeeds");

    assert!(retired.is_retired());
    assert!(employed.iter().any(|d| d.member_id == stays.member_id));
    assert!(employed.iter().all(|d| d.member_id != leaves.member_id));
}

#[rstest]
#[tokio::test]
async fn retiring_twice_keeps_the_developer_retired() {
    let Some(repo) = repository().await else {
        return;
    };
    let mut developer = junior(unique_member_id());
    repo.create(&developer).await.expect("create succeeds");
    let record = developer.retire();

    repo.retire(&developer, &record).await.expect("first retire");
    let again = repo
        .retire(&developer, &record)
        .await
        .expect("audit insert is idempotent");

    assert_eq!(again.status, EmploymentStatus::Retired);
}

#[rstest]
#[tokio::test]
async fn save_after_a_retire_keeps_the_retirement() {
    let Some(repo) = repository().await else {
        return;
    };
    let stale = junior(unique_member_id());
    repo.create(&stale).await.expect("create succeeds");
    let mut retiring = stale.clone();
    let record = retiring.retire();
    repo.retire(&retiring, &record).await.expect("retire succeeds");

    let mut edited = stale;
    edited.reassign(
        DeveloperLevel::Jungnior,
        DeveloperSkillType::BackEnd,
        ExperienceYears::new(6),
    );
    let saved = repo.save(&edited).await.expect("save succeeds");

    assert_eq!(saved.status, EmploymentStatus::Retired);
    assert_eq!(saved.level, DeveloperLevel::Jungnior);
    let employed = repo
        .find_all_by_status(EmploymentStatus::Employed)
        .await
        .expect("listing succeeds");
    assert!(employed.iter().all(|d| d.member_id != edited.member_id));
}

#[rstest]
#[tokio::test]
async fn retire_after_an_edit_keeps_the_edit() {
    let Some(repo) = repository().await else {
        return;
    };
    let stale = junior(unique_member_id());
    repo.create(&stale).await.expect("create succeeds");
    let mut edited = stale.clone();
    edited.reassign(
        DeveloperLevel::Senior,
        DeveloperSkillType::FullStack,
        ExperienceYears::new(12),
    );
    repo.save(&edited).await.expect("save succeeds");

    let mut retiring = stale;
    let record = retiring.retire();
    let retired = repo.retire(&retiring, &record).await.expect("retire succeeds");

    assert!(retired.is_retired());
    assert_eq!(retired.level, DeveloperLevel::Senior);
    assert_eq!(retired.experience_years, ExperienceYears::new(12));
}

#[rstest]
#[tokio::test]
async fn ping_reaches_the_database() {
    let Some(repo) = repository().await else {
        return;
    };

    assert_eq!(repo.store_kind(), "postgres");
    repo.ping().await.expect("database answers");
}
