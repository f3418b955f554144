//! SeaORM implementations of the customer and service supplier
//! repositories (customer schema).

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{
    active, db_err, last_per_id, link_href, link_rel, upsert_all, OrganisationColumns,
    StatusColumns,
};
use crate::domain::common::Organisation;
use crate::domain::customer::{
    Customer, CustomerRepository, OrganisationRole, Priority, ServiceSupplier,
    ServiceSupplierRepository,
};
use crate::domain::kinds::{CustomerKind, SupplierKind};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{customer, service_supplier};

// ── Conversion helpers ──────────────────────────────────────────

fn customer_to_domain(m: customer::Model) -> DomainResult<Customer> {
    let organisation: Organisation = organisation_columns!(m).into();
    Ok(Customer {
        role: OrganisationRole { organisation },
        kind: m.kind.as_deref().map(CustomerKind::from_code).transpose()?,
        special_need: m.special_need.clone(),
        vip: m.vip,
        puc_number: m.puc_number.clone(),
        status: status_columns!(m).into(),
        priority: Priority {
            value: m.priority_value,
            rank: m.priority_rank,
            priority_type: m.priority_type.clone(),
        },
        locale: m.locale.clone(),
        customer_name: m.customer_name.clone(),
        object: identified_object!(m),
    })
}

fn customer_to_entity(c: &Customer) -> customer::Model {
    let o = &c.object;
    let org = OrganisationColumns::from(&c.role.organisation);
    let status = StatusColumns::from(&c.status);
    customer::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        organisation_name: org.name,
        organisation_address_street_number: org.address.street_number,
        organisation_address_street_name: org.address.street_name,
        organisation_address_street_suffix: org.address.street_suffix,
        organisation_address_suite_number: org.address.suite_number,
        organisation_address_town_code: org.address.town_code,
        organisation_address_town_name: org.address.town_name,
        organisation_address_state_or_province: org.address.state_or_province,
        organisation_address_country: org.address.country,
        organisation_address_postal_code: org.address.postal_code,
        organisation_address_status_value: org.address.status.value,
        organisation_address_status_date_time: org.address.status.date_time,
        organisation_address_status_remark: org.address.status.remark,
        organisation_address_status_reason: org.address.status.reason,
        organisation_phone1_country_code: org.phone1.country_code,
        organisation_phone1_area_code: org.phone1.area_code,
        organisation_phone1_local_number: org.phone1.local_number,
        organisation_phone1_ext: org.phone1.ext,
        organisation_electronic_address_email1: org.electronic_address.email1,
        organisation_electronic_address_email2: org.electronic_address.email2,
        organisation_electronic_address_web: org.electronic_address.web,
        organisation_electronic_address_lan: org.electronic_address.lan,
        kind: c.kind.map(|k| k.code().to_string()),
        special_need: c.special_need.clone(),
        vip: c.vip,
        puc_number: c.puc_number.clone(),
        status_value: status.value,
        status_date_time: status.date_time,
        status_remark: status.remark,
        status_reason: status.reason,
        priority_value: c.priority.value,
        priority_rank: c.priority.rank,
        priority_type: c.priority.priority_type.clone(),
        locale: c.locale.clone(),
        customer_name: c.customer_name.clone(),
    }
}

fn supplier_to_domain(m: service_supplier::Model) -> DomainResult<ServiceSupplier> {
    let organisation: Organisation = organisation_columns!(m).into();
    Ok(ServiceSupplier {
        role: OrganisationRole { organisation },
        kind: m.kind.as_deref().map(SupplierKind::from_code).transpose()?,
        issuer_identification_number: m.issuer_identification_number.clone(),
        effective_date: m.effective_date,
        object: identified_object!(m),
    })
}

fn supplier_to_entity(s: &ServiceSupplier) -> service_supplier::Model {
    let o = &s.object;
    let org = OrganisationColumns::from(&s.role.organisation);
    service_supplier::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        organisation_name: org.name,
        organisation_address_street_number: org.address.street_number,
        organisation_address_street_name: org.address.street_name,
        organisation_address_street_suffix: org.address.street_suffix,
        organisation_address_suite_number: org.address.suite_number,
        organisation_address_town_code: org.address.town_code,
        organisation_address_town_name: org.address.town_name,
        organisation_address_state_or_province: org.address.state_or_province,
        organisation_address_country: org.address.country,
        organisation_address_postal_code: org.address.postal_code,
        organisation_address_status_value: org.address.status.value,
        organisation_address_status_date_time: org.address.status.date_time,
        organisation_address_status_remark: org.address.status.remark,
        organisation_address_status_reason: org.address.status.reason,
        organisation_phone1_country_code: org.phone1.country_code,
        organisation_phone1_area_code: org.phone1.area_code,
        organisation_phone1_local_number: org.phone1.local_number,
        organisation_phone1_ext: org.phone1.ext,
        organisation_electronic_address_email1: org.electronic_address.email1,
        organisation_electronic_address_email2: org.electronic_address.email2,
        organisation_electronic_address_web: org.electronic_address.web,
        organisation_electronic_address_lan: org.electronic_address.lan,
        kind: s.kind.map(|k| k.code().to_string()),
        issuer_identification_number: s.issuer_identification_number.clone(),
        effective_date: s.effective_date,
    }
}

// ── SeaOrmCustomerRepository ────────────────────────────────────

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Customer> for SeaOrmCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(customer_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .order_by_asc(customer::Column::CustomerName)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(customer_to_domain).collect()
    }

    async fn save_all(&self, items: Vec<Customer>) -> DomainResult<Vec<Customer>> {
        let items = last_per_id(items);
        let rows: Vec<customer::ActiveModel> =
            items.iter().map(|c| active(customer_to_entity(c))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Customers saved");
        Ok(items)
    }

    /// Accounts of the customer survive and lose their owner reference.
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Customer not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = customer::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        customer::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_by_puc_number(&self, puc_number: &str) -> DomainResult<Option<Customer>> {
        debug!(puc_number, "Looking up customer");
        let model = customer::Entity::find()
            .filter(customer::Column::PucNumber.eq(puc_number))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(customer_to_domain).transpose()
    }
}

// ── SeaOrmServiceSupplierRepository ─────────────────────────────

pub struct SeaOrmServiceSupplierRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<ServiceSupplier> for SeaOrmServiceSupplierRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ServiceSupplier>> {
        let model = service_supplier::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(supplier_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ServiceSupplier>> {
        let models = service_supplier::Entity::find()
            .order_by_asc(service_supplier::Column::OrganisationName)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(supplier_to_domain).collect()
    }

    async fn save_all(&self, items: Vec<ServiceSupplier>) -> DomainResult<Vec<ServiceSupplier>> {
        let items = last_per_id(items);
        let rows: Vec<service_supplier::ActiveModel> =
            items.iter().map(|s| active(supplier_to_entity(s))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Service suppliers saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = service_supplier::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Service supplier not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = service_supplier::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        service_supplier::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl ServiceSupplierRepository for SeaOrmServiceSupplierRepository {}
