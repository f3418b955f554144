coded_kind! {
    /// Service category of a usage point.
    pub enum ServiceKind: i32 {
        Electricity = 0,
        Gas = 1,
        Water = 2,
        Time = 3,
        Heat = 4,
        Refuse = 5,
        Sewerage = 6,
        Rates = 7,
        TvLicence = 8,
        Internet = 9,
    }
}

coded_kind! {
    pub enum AmiBillingReadyKind: str {
        AmiCapable = "amiCapable",
        AmiDisabled = "amiDisabled",
        BillingApproved = "billingApproved",
        Enabled = "enabled",
        NonAmi = "nonAmi",
        NonMetered = "nonMetered",
        Operable = "operable",
    }
}

coded_kind! {
    pub enum UsagePointConnectedKind: str {
        Connected = "connected",
        LogicallyDisconnected = "logicallyDisconnected",
        PhysicallyDisconnected = "physicallyDisconnected",
    }
}

coded_kind! {
    /// Classification of a bill line item.
    pub enum ItemKind: i32 {
        EnergyGenerationFee = 1,
        EnergyDeliveryFee = 2,
        EnergyUsageFee = 3,
        AdministrativeFee = 4,
        Tax = 5,
        EnergyGenerationCredit = 6,
        EnergyDeliveryCredit = 7,
        AdministrativeCredit = 8,
        Payment = 9,
        Information = 10,
    }
}

coded_kind! {
    pub enum EnrollmentStatus: str {
        Unenrolled = "unenrolled",
        Enrolled = "enrolled",
        EnrolledPending = "enrolledPending",
    }
}

coded_kind! {
    /// Pricing node classification.
    pub enum ApnodeType: str {
        Ar = "AR",
        Gr = "GR",
        Ls = "LS",
        Ps = "PS",
        Pn = "PN",
        Un = "UN",
    }
}

coded_kind! {
    /// Aggregate node classification.
    pub enum AnodeType: str {
        Bus = "BUS",
        Dpz = "DPZ",
        Load = "LOAD",
        Rpz = "RPZ",
        Sys = "SYS",
        Tz = "TZ",
    }
}
