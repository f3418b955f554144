//! SeaORM implementations of the customer account and customer agreement
//! repositories (customer schema).

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{
    active, active_serial, db_err, find_in, group_by, insert_all, interval, last_per_id, link_href,
    link_rel, upsert_all, ElectronicAddressColumns, MeasurementColumns, StatusColumns,
};
use crate::domain::customer::{
    AccountNotification, Agreement, CustomerAccount, CustomerAccountRepository,
    CustomerAgreement, CustomerAgreementRepository, DemandResponseProgram, Document,
};
use crate::domain::kinds::{EnrollmentStatus, NotificationMethodKind};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    customer_account, customer_account_notification, customer_agreement,
    customer_agreement_demand_response_program, customer_agreement_future_status,
    customer_agreement_pricing_structure,
};

/// Document columns shared by account and agreement rows.
macro_rules! document {
    ($model:expr) => {
        Document {
            created_date_time: $model.created_date_time,
            last_modified_date_time: $model.last_modified_date_time,
            revision_number: $model.revision_number.clone(),
            electronic_address: electronic_address_columns!($model).into(),
            subject: $model.subject.clone(),
            title: $model.title.clone(),
            doc_type: $model.doc_type.clone(),
            status: status_columns!($model).into(),
        }
    };
}

// ── Customer account conversion ─────────────────────────────────

fn notification_to_domain(
    m: customer_account_notification::Model,
) -> DomainResult<AccountNotification> {
    Ok(AccountNotification {
        method_kind: m
            .method_kind
            .as_deref()
            .map(NotificationMethodKind::from_code)
            .transpose()?,
        time: m.time,
        note: m.note,
        customer_notification_kind: m.customer_notification_kind,
    })
}

fn account_to_domain(
    m: customer_account::Model,
    notifications: Vec<customer_account_notification::Model>,
) -> DomainResult<CustomerAccount> {
    Ok(CustomerAccount {
        document: document!(m),
        billing_cycle: m.billing_cycle.clone(),
        budget_bill: m.budget_bill.clone(),
        last_bill_amount: m.last_bill_amount,
        account_id: m.account_id.clone(),
        customer_id: m.customer_id,
        notifications: notifications
            .into_iter()
            .map(notification_to_domain)
            .collect::<DomainResult<_>>()?,
        object: identified_object!(m),
    })
}

fn account_to_entity(a: &CustomerAccount) -> customer_account::Model {
    let o = &a.object;
    let doc = &a.document;
    let email = ElectronicAddressColumns::from(&doc.electronic_address);
    let status = StatusColumns::from(&doc.status);
    customer_account::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        created_date_time: doc.created_date_time,
        last_modified_date_time: doc.last_modified_date_time,
        revision_number: doc.revision_number.clone(),
        subject: doc.subject.clone(),
        title: doc.title.clone(),
        doc_type: doc.doc_type.clone(),
        electronic_address_email1: email.email1,
        electronic_address_email2: email.email2,
        electronic_address_web: email.web,
        electronic_address_lan: email.lan,
        status_value: status.value,
        status_date_time: status.date_time,
        status_remark: status.remark,
        status_reason: status.reason,
        billing_cycle: a.billing_cycle.clone(),
        budget_bill: a.budget_bill.clone(),
        last_bill_amount: a.last_bill_amount,
        account_id: a.account_id.clone(),
        customer_id: a.customer_id,
    }
}

async fn hydrate_accounts<C: ConnectionTrait>(
    conn: &C,
    models: Vec<customer_account::Model>,
) -> DomainResult<Vec<CustomerAccount>> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let notifications = find_in::<customer_account_notification::Entity, _, _>(
        conn,
        customer_account_notification::Column::CustomerAccountId,
        &ids,
        customer_account_notification::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let mut notifications = group_by(notifications, |n| n.customer_account_id);
    models
        .into_iter()
        .map(|m| {
            let id = m.id;
            account_to_domain(m, notifications.remove(&id).unwrap_or_default())
        })
        .collect()
}

// ── Customer agreement conversion ───────────────────────────────

fn program_to_domain(
    m: customer_agreement_demand_response_program::Model,
) -> DomainResult<DemandResponseProgram> {
    let capacity = MeasurementColumns {
        multiplier: m.capacity_reservation_level_multiplier,
        uom: m.capacity_reservation_level_uom,
        value: m.capacity_reservation_level_value,
        time_stamp: m.capacity_reservation_level_time_stamp,
        reading_type_ref: m.capacity_reservation_level_reading_type_ref,
    };
    let nomination = MeasurementColumns {
        multiplier: m.dr_program_nomination_multiplier,
        uom: m.dr_program_nomination_uom,
        value: m.dr_program_nomination_value,
        time_stamp: m.dr_program_nomination_time_stamp,
        reading_type_ref: m.dr_program_nomination_reading_type_ref,
    };
    Ok(DemandResponseProgram {
        program_name: m.program_name,
        enrollment_status: m
            .enrollment_status
            .as_deref()
            .map(EnrollmentStatus::from_code)
            .transpose()?,
        program_description: m.program_description,
        program_date: interval(m.program_date_start, m.program_date_duration),
        capacity_reservation_level: capacity.into_measurement()?,
        dr_program_nomination: nomination.into_measurement()?,
    })
}

fn program_to_entity(
    p: &DemandResponseProgram,
    customer_agreement_id: Uuid,
) -> customer_agreement_demand_response_program::Model {
    let capacity = MeasurementColumns::from(&p.capacity_reservation_level);
    let nomination = MeasurementColumns::from(&p.dr_program_nomination);
    customer_agreement_demand_response_program::Model {
        id: 0,
        customer_agreement_id,
        program_name: p.program_name.clone(),
        enrollment_status: p.enrollment_status.map(|k| k.code().to_string()),
        program_description: p.program_description.clone(),
        program_date_start: p.program_date.start,
        program_date_duration: p.program_date.duration,
        capacity_reservation_level_multiplier: capacity.multiplier,
        capacity_reservation_level_uom: capacity.uom,
        capacity_reservation_level_value: capacity.value,
        capacity_reservation_level_time_stamp: capacity.time_stamp,
        capacity_reservation_level_reading_type_ref: capacity.reading_type_ref,
        dr_program_nomination_multiplier: nomination.multiplier,
        dr_program_nomination_uom: nomination.uom,
        dr_program_nomination_value: nomination.value,
        dr_program_nomination_time_stamp: nomination.time_stamp,
        dr_program_nomination_reading_type_ref: nomination.reading_type_ref,
    }
}

fn agreement_to_domain(
    m: customer_agreement::Model,
    programs: Vec<customer_agreement_demand_response_program::Model>,
    pricing_structures: Vec<customer_agreement_pricing_structure::Model>,
    future_statuses: Vec<customer_agreement_future_status::Model>,
) -> DomainResult<CustomerAgreement> {
    Ok(CustomerAgreement {
        agreement: Agreement {
            document: document!(m),
            sign_date: m.sign_date,
            validity_interval: interval(m.validity_interval_start, m.validity_interval_duration),
        },
        load_mgmt: m.load_mgmt.clone(),
        is_pre_pay: m.is_pre_pay,
        shut_off_date_time: m.shut_off_date_time,
        currency: m.currency.clone(),
        agreement_id: m.agreement_id.clone(),
        customer_account_id: m.customer_account_id,
        demand_response_programs: programs
            .into_iter()
            .map(program_to_domain)
            .collect::<DomainResult<_>>()?,
        pricing_structures: pricing_structures
            .into_iter()
            .map(|p| p.pricing_structure)
            .collect(),
        future_statuses: future_statuses
            .iter()
            .map(|s| status_columns!(s).into())
            .collect(),
        object: identified_object!(m),
    })
}

fn agreement_to_entity(a: &CustomerAgreement) -> customer_agreement::Model {
    let o = &a.object;
    let doc = &a.agreement.document;
    let email = ElectronicAddressColumns::from(&doc.electronic_address);
    let status = StatusColumns::from(&doc.status);
    customer_agreement::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        created_date_time: doc.created_date_time,
        last_modified_date_time: doc.last_modified_date_time,
        revision_number: doc.revision_number.clone(),
        subject: doc.subject.clone(),
        title: doc.title.clone(),
        doc_type: doc.doc_type.clone(),
        electronic_address_email1: email.email1,
        electronic_address_email2: email.email2,
        electronic_address_web: email.web,
        electronic_address_lan: email.lan,
        status_value: status.value,
        status_date_time: status.date_time,
        status_remark: status.remark,
        status_reason: status.reason,
        sign_date: a.agreement.sign_date,
        validity_interval_start: a.agreement.validity_interval.start,
        validity_interval_duration: a.agreement.validity_interval.duration,
        load_mgmt: a.load_mgmt.clone(),
        is_pre_pay: a.is_pre_pay,
        shut_off_date_time: a.shut_off_date_time,
        currency: a.currency.clone(),
        agreement_id: a.agreement_id.clone(),
        customer_account_id: a.customer_account_id,
    }
}

async fn hydrate_agreements<C: ConnectionTrait>(
    conn: &C,
    models: Vec<customer_agreement::Model>,
) -> DomainResult<Vec<CustomerAgreement>> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let programs = find_in::<customer_agreement_demand_response_program::Entity, _, _>(
        conn,
        customer_agreement_demand_response_program::Column::CustomerAgreementId,
        &ids,
        customer_agreement_demand_response_program::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let pricing = find_in::<customer_agreement_pricing_structure::Entity, _, _>(
        conn,
        customer_agreement_pricing_structure::Column::CustomerAgreementId,
        &ids,
        customer_agreement_pricing_structure::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let statuses = find_in::<customer_agreement_future_status::Entity, _, _>(
        conn,
        customer_agreement_future_status::Column::CustomerAgreementId,
        &ids,
        customer_agreement_future_status::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let mut programs = group_by(programs, |p| p.customer_agreement_id);
    let mut pricing = group_by(pricing, |p| p.customer_agreement_id);
    let mut statuses = group_by(statuses, |s| s.customer_agreement_id);

    models
        .into_iter()
        .map(|m| {
            let id = m.id;
            agreement_to_domain(
                m,
                programs.remove(&id).unwrap_or_default(),
                pricing.remove(&id).unwrap_or_default(),
                statuses.remove(&id).unwrap_or_default(),
            )
        })
        .collect()
}

async fn delete_agreement_children<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<Uuid>,
) -> DomainResult<()> {
    customer_agreement_demand_response_program::Entity::delete_many()
        .filter(
            customer_agreement_demand_response_program::Column::CustomerAgreementId
                .is_in(ids.clone()),
        )
        .exec(conn)
        .await
        .map_err(db_err)?;
    customer_agreement_pricing_structure::Entity::delete_many()
        .filter(customer_agreement_pricing_structure::Column::CustomerAgreementId.is_in(ids.clone()))
        .exec(conn)
        .await
        .map_err(db_err)?;
    customer_agreement_future_status::Entity::delete_many()
        .filter(customer_agreement_future_status::Column::CustomerAgreementId.is_in(ids))
        .exec(conn)
        .await
        .map_err(db_err)?;
    Ok(())
}

// ── SeaOrmCustomerAccountRepository ─────────────────────────────

pub struct SeaOrmCustomerAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<CustomerAccount> for SeaOrmCustomerAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CustomerAccount>> {
        let model = customer_account::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate_accounts(&self.db, vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<CustomerAccount>> {
        let models = customer_account::Entity::find()
            .order_by_asc(customer_account::Column::AccountId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate_accounts(&self.db, models).await
    }

    async fn save_all(&self, items: Vec<CustomerAccount>) -> DomainResult<Vec<CustomerAccount>> {
        let items = last_per_id(items);
        let ids: Vec<Uuid> = items.iter().map(|a| a.object.id).collect();
        let rows: Vec<customer_account::ActiveModel> =
            items.iter().map(|a| active(account_to_entity(a))).collect();
        let notifications: Vec<customer_account_notification::ActiveModel> = items
            .iter()
            .flat_map(|a| {
                a.notifications.iter().map(move |n| {
                    active_serial(customer_account_notification::Model {
                        id: 0,
                        customer_account_id: a.object.id,
                        method_kind: n.method_kind.map(|k| k.code().to_string()),
                        time: n.time,
                        note: n.note.clone(),
                        customer_notification_kind: n.customer_notification_kind.clone(),
                    })
                })
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        customer_account_notification::Entity::delete_many()
            .filter(customer_account_notification::Column::CustomerAccountId.is_in(ids))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        insert_all(&txn, notifications).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), "Customer accounts saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        customer_account_notification::Entity::delete_many()
            .filter(customer_account_notification::Column::CustomerAccountId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = customer_account::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Customer account not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        customer_account_notification::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = customer_account::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        customer_account::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl CustomerAccountRepository for SeaOrmCustomerAccountRepository {
    async fn find_by_account_id(&self, account_id: &str) -> DomainResult<Option<CustomerAccount>> {
        debug!(account_id, "Looking up customer account");
        let model = customer_account::Entity::find()
            .filter(customer_account::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate_accounts(&self.db, vec![model]).await?.pop())
    }
}

// ── SeaOrmCustomerAgreementRepository ───────────────────────────

pub struct SeaOrmCustomerAgreementRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerAgreementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<CustomerAgreement> for SeaOrmCustomerAgreementRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CustomerAgreement>> {
        let model = customer_agreement::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate_agreements(&self.db, vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<CustomerAgreement>> {
        let models = customer_agreement::Entity::find()
            .order_by_asc(customer_agreement::Column::AgreementId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate_agreements(&self.db, models).await
    }

    async fn save_all(
        &self,
        items: Vec<CustomerAgreement>,
    ) -> DomainResult<Vec<CustomerAgreement>> {
        let items = last_per_id(items);
        let ids: Vec<Uuid> = items.iter().map(|a| a.object.id).collect();
        let rows: Vec<customer_agreement::ActiveModel> =
            items.iter().map(|a| active(agreement_to_entity(a))).collect();
        let mut programs: Vec<customer_agreement_demand_response_program::ActiveModel> =
            Vec::new();
        let mut pricing: Vec<customer_agreement_pricing_structure::ActiveModel> = Vec::new();
        let mut statuses: Vec<customer_agreement_future_status::ActiveModel> = Vec::new();
        for a in &items {
            let id = a.object.id;
            for program in &a.demand_response_programs {
                programs.push(active_serial(program_to_entity(program, id)));
            }
            for structure in &a.pricing_structures {
                pricing.push(active_serial(customer_agreement_pricing_structure::Model {
                    id: 0,
                    customer_agreement_id: id,
                    pricing_structure: structure.clone(),
                }));
            }
            for status in &a.future_statuses {
                let columns = StatusColumns::from(status);
                statuses.push(active_serial(customer_agreement_future_status::Model {
                    id: 0,
                    customer_agreement_id: id,
                    status_value: columns.value,
                    status_date_time: columns.date_time,
                    status_remark: columns.remark,
                    status_reason: columns.reason,
                }));
            }
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        delete_agreement_children(&txn, ids).await?;
        insert_all(&txn, programs).await.map_err(db_err)?;
        insert_all(&txn, pricing).await.map_err(db_err)?;
        insert_all(&txn, statuses).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), "Customer agreements saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        delete_agreement_children(&txn, vec![id]).await?;
        let result = customer_agreement::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Customer agreement not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        customer_agreement_demand_response_program::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        customer_agreement_pricing_structure::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        customer_agreement_future_status::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = customer_agreement::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        customer_agreement::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl CustomerAgreementRepository for SeaOrmCustomerAgreementRepository {
    async fn find_by_agreement_id(
        &self,
        agreement_id: &str,
    ) -> DomainResult<Option<CustomerAgreement>> {
        debug!(agreement_id, "Looking up customer agreement");
        let model = customer_agreement::Entity::find()
            .filter(customer_agreement::Column::AgreementId.eq(agreement_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate_agreements(&self.db, vec![model]).await?.pop())
    }
}
