//! Repository behaviour against an in-memory SQLite database.

use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;

use super::SeaOrmRepositoryProvider;
use crate::domain::application_information::ApplicationInformation;
use crate::domain::authorization::Authorization;
use crate::domain::common::{DateTimeInterval, PositionPoint, Status};
use crate::domain::customer::{
    Customer, CustomerAccount, CustomerAgreement, DemandResponseProgram, EndDevice,
    ServiceLocation,
};
use crate::domain::kinds::{
    AnodeType, ApnodeType, EnrollmentStatus, GrantType, ItemKind, QualityOfReading,
};
use crate::domain::reading_type::ReadingType;
use crate::domain::reference_data::TimeConfiguration;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::retail_customer::RetailCustomer;
use crate::domain::subscription::Subscription;
use crate::domain::usage_point::{
    AggregateNodeRef, ElectricPowerQualitySummary, IntervalBlock, IntervalReading, LineItem,
    MeterReading, PnodeRef, UsagePoint, UsageSummary,
};
use crate::infrastructure::database::entities::{
    electric_power_quality_summary, interval_block, interval_reading, line_item, meter_reading,
    reading_quality, usage_point_aggregate_node_ref, usage_point_pnode_ref, usage_summary,
};
use crate::infrastructure::database::migrator::Migrator;
use crate::shared::errors::DomainError;
use crate::shared::identity::derive_id;

const BASE: &str = "https://dc.example/espi/1_1/resource";

async fn setup() -> (DatabaseConnection, SeaOrmRepositoryProvider) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    (db.clone(), SeaOrmRepositoryProvider::new(db))
}

async fn rows<E>(db: &DatabaseConnection) -> u64
where
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(db).await.expect("count rows")
}

fn retail_customer() -> RetailCustomer {
    RetailCustomer::new(&format!("{BASE}/RetailCustomer/9"), "alan").named("Alan", "Turing")
}

fn reading_type() -> ReadingType {
    ReadingType::interval_energy(&format!("{BASE}/ReadingType/1"), 900)
}

fn usage_point(rc: &RetailCustomer, rt: &ReadingType) -> UsagePoint {
    let mut first = IntervalReading::new(0, 900, 120).with_cost(15);
    first.add_quality(QualityOfReading::Valid);
    first.add_quality(QualityOfReading::Raw);
    let mut second = IntervalReading::new(900, 900, 80);
    second.add_quality(QualityOfReading::Validated);

    let block = IntervalBlock::new(&format!("{BASE}/IntervalBlock/1"), 0, 1800)
        .with_reading(first)
        .with_reading(second);
    let reading = MeterReading::new(&format!("{BASE}/MeterReading/1"))
        .with_reading_type(rt.object.id)
        .with_block(block);
    let summary = UsageSummary::new(
        &format!("{BASE}/UsageSummary/1"),
        DateTimeInterval::new(0, 2_592_000),
    )
    .with_line_item(LineItem::new(1_000, 0, "energy").of_kind(ItemKind::EnergyUsageFee))
    .with_line_item(LineItem::new(250, 0, "tax").of_kind(ItemKind::Tax));

    UsagePoint::new(&format!("{BASE}/UsagePoint/1"))
        .for_retail_customer(rc.object.id)
        .with_meter_reading(reading)
        .with_usage_summary(summary)
}

/// Retail customer, reading type and one usage point with interval data.
async fn seed(repos: &SeaOrmRepositoryProvider) -> UsagePoint {
    let rc = repos
        .retail_customers()
        .save(retail_customer())
        .await
        .expect("save retail customer");
    let rt = repos
        .reading_types()
        .save(reading_type())
        .await
        .expect("save reading type");
    repos
        .usage_points()
        .save(usage_point(&rc, &rt))
        .await
        .expect("save usage point")
}

#[tokio::test]
async fn usage_point_graph_survives_a_round_trip() {
    let (_db, repos) = setup().await;
    let saved = seed(&repos).await;

    let loaded = repos
        .usage_points()
        .find_by_id(saved.object.id)
        .await
        .unwrap()
        .expect("usage point stored");

    assert_eq!(loaded.object, saved.object);
    assert_eq!(loaded.retail_customer_id, saved.retail_customer_id);
    assert_eq!(loaded.meter_readings.len(), 1);
    let block = &loaded.meter_readings[0].interval_blocks[0];
    assert_eq!(block.meter_reading_id, Some(saved.meter_readings[0].object.id));
    assert_eq!(block.interval_readings, saved.meter_readings[0].interval_blocks[0].interval_readings);
    assert!(block.interval_readings[0].has_quality(QualityOfReading::Raw));
    assert_eq!(loaded.usage_summaries[0].line_items, saved.usage_summaries[0].line_items);
    assert_eq!(loaded.usage_summaries[0].line_item_total(), Some(1_250));
}

#[tokio::test]
async fn deleting_usage_point_cascades_to_owned_rows_only() {
    let (db, repos) = setup().await;
    let up = seed(&repos).await;
    assert_eq!(rows::<reading_quality::Entity>(&db).await, 3);

    assert!(repos.usage_points().delete_by_id(up.object.id).await.unwrap());

    assert_eq!(rows::<meter_reading::Entity>(&db).await, 0);
    assert_eq!(rows::<interval_block::Entity>(&db).await, 0);
    assert_eq!(rows::<interval_reading::Entity>(&db).await, 0);
    assert_eq!(rows::<reading_quality::Entity>(&db).await, 0);
    assert_eq!(rows::<usage_summary::Entity>(&db).await, 0);
    assert_eq!(rows::<line_item::Entity>(&db).await, 0);
    assert_eq!(repos.retail_customers().count().await.unwrap(), 1);
    assert_eq!(repos.reading_types().count().await.unwrap(), 1);

    assert!(!repos.usage_points().delete_by_id(up.object.id).await.unwrap());
}

#[tokio::test]
async fn removed_interval_reading_is_deleted_on_save() {
    let (db, repos) = setup().await;
    let mut up = seed(&repos).await;

    let block = &mut up.meter_readings[0].interval_blocks[0];
    assert_eq!(block.remove_readings_starting_at(0), 1);
    repos.usage_points().save(up.clone()).await.unwrap();

    assert_eq!(rows::<interval_reading::Entity>(&db).await, 1);
    assert_eq!(rows::<reading_quality::Entity>(&db).await, 1);
    let reading = repos
        .usage_points()
        .find_meter_reading(up.meter_readings[0].object.id)
        .await
        .unwrap()
        .expect("meter reading stored");
    assert_eq!(reading.interval_reading_count(), 1);
    assert_eq!(reading.interval_blocks[0].total_value(), Some(80));
}

#[tokio::test]
async fn saving_same_natural_key_overwrites() {
    let (db, repos) = setup().await;
    let mut up = seed(&repos).await;

    up.object.description = Some("Front meter".to_string());
    repos.usage_points().save(up.clone()).await.unwrap();
    repos.usage_points().save(up.clone()).await.unwrap();

    assert_eq!(repos.usage_points().count().await.unwrap(), 1);
    assert_eq!(rows::<interval_reading::Entity>(&db).await, 2);
    assert_eq!(rows::<line_item::Entity>(&db).await, 2);
    let loaded = repos.usage_points().find_by_id(up.object.id).await.unwrap().unwrap();
    assert_eq!(loaded.object.description.as_deref(), Some("Front meter"));
}

#[tokio::test]
async fn repeated_key_in_one_batch_keeps_the_last() {
    let (db, repos) = setup().await;
    let rc = repos.retail_customers().save(retail_customer()).await.unwrap();
    let rt = repos.reading_types().save(reading_type()).await.unwrap();
    let first = usage_point(&rc, &rt);
    let mut last = first.clone();
    last.object.description = Some("Replacement".to_string());

    let saved = repos
        .usage_points()
        .save_all(vec![first, last])
        .await
        .expect("repeated usage point saves");
    assert_eq!(saved.len(), 1);
    assert_eq!(repos.usage_points().count().await.unwrap(), 1);
    assert_eq!(rows::<meter_reading::Entity>(&db).await, 1);
    assert_eq!(rows::<interval_reading::Entity>(&db).await, 2);
    let loaded = repos.usage_points().find_by_id(saved[0].object.id).await.unwrap().unwrap();
    assert_eq!(loaded.object.description.as_deref(), Some("Replacement"));

    let renamed = retail_customer().named("Alan", "M. Turing");
    let saved = repos
        .retail_customers()
        .save_all(vec![retail_customer(), renamed])
        .await
        .unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(repos.retail_customers().count().await.unwrap(), 1);
    let loaded = repos.retail_customers().find_by_id(rc.object.id).await.unwrap().unwrap();
    assert_eq!(loaded.full_name(), "Alan M. Turing");
}

#[tokio::test]
async fn deleting_reading_type_keeps_meter_readings() {
    let (_db, repos) = setup().await;
    let up = seed(&repos).await;
    let reading = &up.meter_readings[0];
    let reading_type_id = reading.reading_type_id.expect("seeded with a reading type");

    assert!(repos.reading_types().delete_by_id(reading_type_id).await.unwrap());

    let loaded = repos
        .usage_points()
        .find_meter_reading(reading.object.id)
        .await
        .unwrap()
        .expect("meter reading survives its reading type");
    assert_eq!(loaded.reading_type_id, None);
    assert_eq!(loaded.interval_reading_count(), 2);
}

#[tokio::test]
async fn deleting_usage_point_removes_quality_summaries_and_node_refs() {
    let (db, repos) = setup().await;
    let mut up = UsagePoint::new(&format!("{BASE}/UsagePoint/3")).with_power_quality_summary(
        ElectricPowerQualitySummary::new(
            &format!("{BASE}/ElectricPowerQualitySummary/1"),
            DateTimeInterval::new(0, 86_400),
        ),
    );
    up.pnode_refs.push(PnodeRef {
        apnode_type: ApnodeType::Pn,
        reference: "PNODE-1".to_string(),
        start_effective_date: Some(0),
        end_effective_date: None,
    });
    up.aggregate_node_refs.push(AggregateNodeRef {
        anode_type: AnodeType::Load,
        reference: "ANODE-1".to_string(),
        start_effective_date: None,
        end_effective_date: None,
    });
    let up = repos.usage_points().save(up).await.unwrap();

    let loaded = repos.usage_points().find_by_id(up.object.id).await.unwrap().unwrap();
    assert_eq!(loaded.electric_power_quality_summaries.len(), 1);
    assert_eq!(loaded.pnode_refs, up.pnode_refs);
    assert_eq!(loaded.aggregate_node_refs, up.aggregate_node_refs);

    assert!(repos.usage_points().delete_by_id(up.object.id).await.unwrap());
    assert_eq!(rows::<electric_power_quality_summary::Entity>(&db).await, 0);
    assert_eq!(rows::<usage_point_pnode_ref::Entity>(&db).await, 0);
    assert_eq!(rows::<usage_point_aggregate_node_ref::Entity>(&db).await, 0);
}

#[tokio::test]
async fn child_order_is_preserved() {
    let (_db, repos) = setup().await;
    let rc = repos.retail_customers().save(retail_customer()).await.unwrap();
    let mut up = UsagePoint::new(&format!("{BASE}/UsagePoint/2")).for_retail_customer(rc.object.id);
    // Hrefs deliberately out of lexical order.
    for n in [3, 1, 2] {
        up = up.with_meter_reading(
            MeterReading::new(&format!("{BASE}/MeterReading/{n}")).with_block(
                IntervalBlock::new(&format!("{BASE}/IntervalBlock/{n}"), 0, 900)
                    .with_reading(IntervalReading::new(0, 900, n)),
            ),
        );
    }
    let saved = repos.usage_points().save(up).await.unwrap();

    let loaded = repos.usage_points().find_by_id(saved.object.id).await.unwrap().unwrap();
    let order: Vec<_> = loaded.meter_readings.iter().map(|m| m.object.id).collect();
    let expected: Vec<_> = saved.meter_readings.iter().map(|m| m.object.id).collect();
    assert_eq!(order, expected);
}

#[tokio::test]
async fn meter_reading_moves_between_usage_points() {
    let (db, repos) = setup().await;
    let first = seed(&repos).await;
    let moved = first.meter_readings[0].clone();

    let second = UsagePoint::new(&format!("{BASE}/UsagePoint/2")).with_meter_reading(moved.clone());
    repos.usage_points().save(second.clone()).await.unwrap();

    let first = repos.usage_points().find_by_id(first.object.id).await.unwrap().unwrap();
    let second = repos.usage_points().find_by_id(second.object.id).await.unwrap().unwrap();
    assert!(first.meter_readings.is_empty());
    assert_eq!(second.meter_readings[0].object.id, moved.object.id);
    assert_eq!(rows::<meter_reading::Entity>(&db).await, 1);
    assert_eq!(rows::<interval_reading::Entity>(&db).await, 2);
}

#[tokio::test]
async fn usage_points_by_retail_customer() {
    let (_db, repos) = setup().await;
    let up = seed(&repos).await;
    let other = derive_id("someone else");

    let owned = repos
        .usage_points()
        .find_all_by_retail_customer(up.retail_customer_id.unwrap())
        .await
        .unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].usage_summaries.len(), 1);
    assert!(repos
        .usage_points()
        .find_all_by_retail_customer(other)
        .await
        .unwrap()
        .is_empty());
}

/// Application, authorization and retail customer a subscription needs.
async fn subscription_parties(
    repos: &SeaOrmRepositoryProvider,
) -> (ApplicationInformation, Authorization, RetailCustomer) {
    let app = ApplicationInformation::new(&format!("{BASE}/ApplicationInformation/1"), "third_party")
        .with_scope("FB=4_5_15;IntervalDuration=3600")
        .with_grant_type(GrantType::AuthorizationCode)
        .with_grant_type(GrantType::RefreshToken);
    let rc = repos.retail_customers().save(retail_customer()).await.unwrap();
    let app = repos.application_information().save(app).await.unwrap();
    let mut auth = Authorization::granted(
        &format!("{BASE}/Authorization/1"),
        "access-token",
        "FB=4_5_15",
        1_000,
        3_600,
    );
    auth.application_information_id = Some(app.object.id);
    auth.retail_customer_id = Some(rc.object.id);
    let auth = repos.authorizations().save(auth).await.unwrap();
    (app, auth, rc)
}

#[tokio::test]
async fn subscription_with_missing_reference_writes_nothing() {
    let (_db, repos) = setup().await;
    let (app, auth, rc) = subscription_parties(&repos).await;
    let missing = derive_id("no such record");

    let dangling = [
        (missing, auth.object.id, rc.object.id),
        (app.object.id, missing, rc.object.id),
        (app.object.id, auth.object.id, missing),
    ];
    for (n, (app_id, auth_id, rc_id)) in dangling.into_iter().enumerate() {
        let valid = Subscription::new(
            &format!("{BASE}/Subscription/{}", 2 * n),
            app.object.id,
            auth.object.id,
            rc.object.id,
        );
        let broken = Subscription::new(
            &format!("{BASE}/Subscription/{}", 2 * n + 1),
            app_id,
            auth_id,
            rc_id,
        );

        let err = repos
            .subscriptions()
            .save_all(vec![valid, broken])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)), "case {n}: {err:?}");
        assert_eq!(repos.subscriptions().count().await.unwrap(), 0, "case {n}");
    }
}

#[tokio::test]
async fn subscription_finders_and_usage_point_links() {
    let (_db, repos) = setup().await;
    let up = seed(&repos).await;
    let (app, auth, rc) = subscription_parties(&repos).await;

    let sub = Subscription::new(
        &format!("{BASE}/Subscription/1"),
        app.object.id,
        auth.object.id,
        rc.object.id,
    )
    .with_usage_point(up.object.id);
    let sub = repos.subscriptions().save(sub).await.unwrap();

    let found = repos
        .subscriptions()
        .find_by_hashed_id(&sub.hashed_id)
        .await
        .unwrap()
        .expect("found by hashed id");
    assert!(found.covers(up.object.id));
    assert_eq!(
        repos
            .subscriptions()
            .find_all_by_retail_customer(rc.object.id)
            .await
            .unwrap()
            .len(),
        1
    );

    // Dropping the usage point unlinks it without touching the subscription.
    repos.usage_points().delete_by_id(up.object.id).await.unwrap();
    let found = repos.subscriptions().find_by_id(sub.object.id).await.unwrap().unwrap();
    assert!(found.usage_point_ids.is_empty());

    // The authorization must outlive its subscriptions.
    assert!(repos.authorizations().delete_by_id(auth.object.id).await.is_err());

    assert!(repos.retail_customers().delete_by_id(rc.object.id).await.unwrap());
    assert_eq!(repos.subscriptions().count().await.unwrap(), 0);
}

#[tokio::test]
async fn oauth_records_are_found_by_their_keys() {
    let (_db, repos) = setup().await;
    let (app, auth, rc) = subscription_parties(&repos).await;

    let found = repos
        .application_information()
        .find_by_client_id("third_party")
        .await
        .unwrap()
        .expect("application by client id");
    assert_eq!(found.scopes, app.scopes);
    assert_eq!(found.grant_types, app.grant_types);

    let found = repos
        .authorizations()
        .find_by_access_token("access-token")
        .await
        .unwrap()
        .expect("authorization by token");
    assert!(found.is_active());
    assert_eq!(found.expires_at(), Some(4_600));
    assert_eq!(
        repos
            .authorizations()
            .find_all_by_retail_customer(rc.object.id)
            .await
            .unwrap()[0]
            .object
            .id,
        auth.object.id
    );

    let found = repos
        .retail_customers()
        .find_by_username("alan")
        .await
        .unwrap()
        .expect("retail customer by username");
    assert_eq!(found.full_name(), "Alan Turing");
    assert!(repos
        .retail_customers()
        .find_by_username("grace")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn time_configuration_keeps_dst_rules() {
    let (_db, repos) = setup().await;
    let tc = TimeConfiguration::new(&format!("{BASE}/LocalTimeParameters/1"), -18_000)
        .with_dst_rules("360e2000", "b40e2000", 3_600)
        .unwrap();
    repos.time_configurations().save(tc.clone()).await.unwrap();

    let loaded = repos
        .time_configurations()
        .find_by_id(tc.object.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, tc);
    assert_eq!(loaded.dst_total_offset(), Some(-14_400));
}

#[tokio::test]
async fn customer_agreement_found_by_agreement_id() {
    let (_db, repos) = setup().await;
    let agreement = CustomerAgreement::with_agreement_id("foo")
        .with_program(DemandResponseProgram::new("Peak Saver", EnrollmentStatus::Enrolled))
        .with_pricing_structure(format!("{BASE}/PricingStructure/7"))
        .with_future_status(Status::new("pending", 1_700_000_000));
    repos.customer_agreements().save(agreement).await.unwrap();

    let loaded = repos
        .customer_agreements()
        .find_by_id(derive_id("foo"))
        .await
        .unwrap()
        .expect("agreement stored under derived id");
    assert_eq!(loaded.agreement_id.as_deref(), Some("foo"));
    assert!(!loaded.demand_response_programs.is_empty());
    assert!(!loaded.pricing_structures.is_empty());
    assert!(!loaded.future_statuses.is_empty());
    assert_eq!(loaded.enrolled_programs().count(), 1);

    let by_key = repos
        .customer_agreements()
        .find_by_agreement_id("foo")
        .await
        .unwrap()
        .expect("agreement by agreement id");
    assert_eq!(by_key.object.id, loaded.object.id);
}

#[tokio::test]
async fn customer_delete_leaves_accounts_unowned() {
    let (_db, repos) = setup().await;
    let customer = repos
        .customers()
        .save(Customer::with_puc_number("PUC-1").named("Acme Utilities"))
        .await
        .unwrap();
    let account = CustomerAccount::with_account_id("ACC-1").for_customer(customer.object.id);
    repos.customer_accounts().save(account).await.unwrap();

    let found = repos.customers().find_by_puc_number("PUC-1").await.unwrap().unwrap();
    assert_eq!(found.customer_name.as_deref(), Some("Acme Utilities"));

    assert!(repos.customers().delete_by_id(customer.object.id).await.unwrap());
    let account = repos
        .customer_accounts()
        .find_by_account_id("ACC-1")
        .await
        .unwrap()
        .expect("account survives its customer");
    assert_eq!(account.customer_id, None);
}

#[tokio::test]
async fn service_location_children_are_replaced() {
    let (_db, repos) = setup().await;
    let location = ServiceLocation::new(&format!("{BASE}/ServiceLocation/1"))
        .with_position(PositionPoint::new("1", "2"))
        .serving(format!("{BASE}/UsagePoint/1"))
        .serving(format!("{BASE}/UsagePoint/2"));
    let mut location = repos.service_locations().save(location).await.unwrap();
    let device = EndDevice::new(&format!("{BASE}/EndDevice/1"), "SN-1").installed_at(location.object.id);
    repos.end_devices().save(device.clone()).await.unwrap();

    location.usage_point_hrefs.truncate(1);
    repos.service_locations().save(location.clone()).await.unwrap();
    let loaded = repos
        .service_locations()
        .find_by_id(location.object.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.usage_point_hrefs, location.usage_point_hrefs);
    assert_eq!(loaded.location.position_points.len(), 1);

    repos.service_locations().delete_by_id(location.object.id).await.unwrap();
    let device = repos.end_devices().find_by_id(device.object.id).await.unwrap().unwrap();
    assert_eq!(device.serial_number(), Some("SN-1"));
    assert_eq!(device.service_location_id, None);
}
