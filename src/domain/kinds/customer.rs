coded_kind! {
    pub enum CustomerKind: str {
        Residential = "residential",
        ResidentialAndCommercial = "residentialAndCommercial",
        ResidentialAndStreetlight = "residentialAndStreetlight",
        ResidentialStreetlightOthers = "residentialStreetlightOthers",
        ResidentialFarmService = "residentialFarmService",
        CommercialIndustrial = "commercialIndustrial",
        PumpingLoad = "pumpingLoad",
        WindMachine = "windMachine",
        EnergyServiceSupplier = "energyServiceSupplier",
        EnergyServiceScheduler = "energyServiceScheduler",
        Enterprise = "enterprise",
        RegionalOperator = "regionalOperator",
        Subsidiary = "subsidiary",
        InternalUse = "internalUse",
        Other = "other",
    }
}

coded_kind! {
    pub enum RevenueKind: str {
        Residential = "residential",
        NonResidential = "nonResidential",
        Commercial = "commercial",
        Industrial = "industrial",
        Irrigation = "irrigation",
        StreetLight = "streetLight",
        Other = "other",
    }
}

coded_kind! {
    pub enum SupplierKind: str {
        Utility = "utility",
        Retailer = "retailer",
        Other = "other",
        LossOfSupply = "lossOfSupply",
    }
}

coded_kind! {
    pub enum NotificationMethodKind: str {
        Call = "call",
        Email = "email",
        Letter = "letter",
        Other = "other",
    }
}

coded_kind! {
    pub enum MeterMultiplierKind: str {
        KH = "kH",
        KR = "kR",
        KE = "kE",
        CtRatio = "ctRatio",
        PtRatio = "ptRatio",
        TransformerRatio = "transformerRatio",
    }
}
