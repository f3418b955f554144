//! Document-derived records: customer accounts and customer agreements.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{
    DateTimeInterval, ElectronicAddress, Identified, IdentifiedObject, Status, SummaryMeasurement,
};
use crate::domain::kinds::{EnrollmentStatus, NotificationMethodKind};

/// Fields shared by every business document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub created_date_time: Option<i64>,
    pub last_modified_date_time: Option<i64>,
    pub revision_number: Option<String>,
    pub electronic_address: ElectronicAddress,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub doc_type: Option<String>,
    pub status: Status,
}

/// A document that is also a formal agreement between parties.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agreement {
    pub document: Document,
    pub sign_date: Option<i64>,
    pub validity_interval: DateTimeInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountNotification {
    pub method_kind: Option<NotificationMethodKind>,
    pub time: Option<i64>,
    pub note: Option<String>,
    pub customer_notification_kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAccount {
    pub object: IdentifiedObject,
    pub document: Document,
    pub billing_cycle: Option<String>,
    pub budget_bill: Option<String>,
    pub last_bill_amount: Option<i64>,
    pub account_id: Option<String>,
    /// Owning customer, if known. Not cascaded.
    pub customer_id: Option<Uuid>,
    pub notifications: Vec<AccountNotification>,
}

impl CustomerAccount {
    pub fn new(self_href: &str) -> Self {
        Self::with_object(IdentifiedObject::from_self_href(self_href))
    }

    pub fn with_account_id(account_id: impl Into<String>) -> Self {
        let account_id = account_id.into();
        Self {
            account_id: Some(account_id.clone()),
            ..Self::with_object(IdentifiedObject::from_natural_key(&account_id))
        }
    }

    fn with_object(object: IdentifiedObject) -> Self {
        Self {
            object,
            document: Document::default(),
            billing_cycle: None,
            budget_bill: None,
            last_bill_amount: None,
            account_id: None,
            customer_id: None,
            notifications: Vec::new(),
        }
    }

    pub fn for_customer(mut self, customer_id: Uuid) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_notification(mut self, notification: AccountNotification) -> Self {
        self.notifications.push(notification);
        self
    }
}

impl Identified for CustomerAccount {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

/// Enrollment of an agreement in a demand response program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemandResponseProgram {
    pub program_name: String,
    pub enrollment_status: Option<EnrollmentStatus>,
    pub program_description: Option<String>,
    pub program_date: DateTimeInterval,
    pub capacity_reservation_level: Option<SummaryMeasurement>,
    pub dr_program_nomination: Option<SummaryMeasurement>,
}

impl DemandResponseProgram {
    pub fn new(program_name: impl Into<String>, enrollment_status: EnrollmentStatus) -> Self {
        Self {
            program_name: program_name.into(),
            enrollment_status: Some(enrollment_status),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAgreement {
    pub object: IdentifiedObject,
    pub agreement: Agreement,
    pub load_mgmt: Option<String>,
    pub is_pre_pay: bool,
    pub shut_off_date_time: Option<i64>,
    pub currency: Option<String>,
    pub agreement_id: Option<String>,
    pub customer_account_id: Option<Uuid>,
    pub demand_response_programs: Vec<DemandResponseProgram>,
    /// References to pricing structures by href.
    pub pricing_structures: Vec<String>,
    pub future_statuses: Vec<Status>,
}

impl CustomerAgreement {
    pub fn new(self_href: &str) -> Self {
        Self::with_object(IdentifiedObject::from_self_href(self_href))
    }

    /// An agreement identified by its agreement id.
    pub fn with_agreement_id(agreement_id: impl Into<String>) -> Self {
        let agreement_id = agreement_id.into();
        Self {
            agreement_id: Some(agreement_id.clone()),
            ..Self::with_object(IdentifiedObject::from_natural_key(&agreement_id))
        }
    }

    fn with_object(object: IdentifiedObject) -> Self {
        Self {
            object,
            agreement: Agreement::default(),
            load_mgmt: None,
            is_pre_pay: false,
            shut_off_date_time: None,
            currency: None,
            agreement_id: None,
            customer_account_id: None,
            demand_response_programs: Vec::new(),
            pricing_structures: Vec::new(),
            future_statuses: Vec::new(),
        }
    }

    pub fn for_account(mut self, customer_account_id: Uuid) -> Self {
        self.customer_account_id = Some(customer_account_id);
        self
    }

    pub fn with_program(mut self, program: DemandResponseProgram) -> Self {
        self.demand_response_programs.push(program);
        self
    }

    pub fn with_pricing_structure(mut self, href: impl Into<String>) -> Self {
        self.pricing_structures.push(href.into());
        self
    }

    pub fn with_future_status(mut self, status: Status) -> Self {
        self.future_statuses.push(status);
        self
    }

    /// Whether the agreement is in force at `instant`. An agreement with no
    /// validity interval is treated as open-ended.
    pub fn is_valid_at(&self, instant: i64) -> bool {
        let validity = &self.agreement.validity_interval;
        validity.is_empty() || validity.contains(instant)
    }

    pub fn enrolled_programs(&self) -> impl Iterator<Item = &DemandResponseProgram> {
        self.demand_response_programs
            .iter()
            .filter(|p| p.enrollment_status == Some(EnrollmentStatus::Enrolled))
    }
}

impl Identified for CustomerAgreement {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::identity::derive_id;

    #[test]
    fn agreement_id_is_the_identity() {
        let agreement = CustomerAgreement::with_agreement_id("foo");
        assert_eq!(agreement.object.id, derive_id("foo"));
        assert_eq!(agreement.agreement_id.as_deref(), Some("foo"));
    }

    #[test]
    fn validity_and_enrollment() {
        let mut agreement = CustomerAgreement::with_agreement_id("foo")
            .with_program(DemandResponseProgram::new("CPP", EnrollmentStatus::Enrolled))
            .with_program(DemandResponseProgram::new("SmartAC", EnrollmentStatus::Unenrolled));
        assert!(agreement.is_valid_at(0));

        agreement.agreement.validity_interval = DateTimeInterval::new(100, 50);
        assert!(agreement.is_valid_at(120));
        assert!(!agreement.is_valid_at(150));

        let names: Vec<_> = agreement.enrolled_programs().map(|p| p.program_name.as_str()).collect();
        assert_eq!(names, vec!["CPP"]);
    }

    #[test]
    fn account_keeps_notifications_in_order() {
        let account = CustomerAccount::with_account_id("ACC-9")
            .with_notification(AccountNotification {
                method_kind: Some(NotificationMethodKind::Email),
                time: Some(10),
                ..AccountNotification::default()
            })
            .with_notification(AccountNotification {
                method_kind: Some(NotificationMethodKind::Letter),
                time: Some(20),
                ..AccountNotification::default()
            });
        assert_eq!(account.object.id, derive_id("ACC-9"));
        assert_eq!(account.notifications[1].time, Some(20));
    }
}
