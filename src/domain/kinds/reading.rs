//! Reading semantics: the CIM classifiers a ReadingType is built from.

coded_kind! {
    /// How values accumulate over the measuring period.
    pub enum AccumulationKind: i32 {
        None = 0,
        BulkQuantity = 1,
        ContinuousCumulative = 2,
        Cumulative = 3,
        DeltaData = 4,
        Indicating = 6,
        Summation = 9,
        TimeDelay = 10,
        Instantaneous = 12,
        LatchingQuantity = 13,
        BoundedQuantity = 14,
    }
}

coded_kind! {
    pub enum CommodityKind: i32 {
        None = 0,
        ElectricitySecondaryMetered = 1,
        ElectricityPrimaryMetered = 2,
        Communication = 3,
        Air = 4,
        InsulativeGas = 5,
        InsulativeOil = 6,
        NaturalGas = 7,
        Propane = 8,
        PotableWater = 9,
        Steam = 10,
        WasteWater = 11,
        HeatingFluid = 12,
        CoolingFluid = 13,
        NonpotableWater = 14,
        Nox = 15,
        So2 = 16,
        Ch4 = 17,
        Co2 = 18,
        Carbon = 19,
        Hch = 20,
        Pfc = 21,
        Sf6 = 22,
        TvLicence = 23,
        Internet = 24,
        Refuse = 25,
    }
}

coded_kind! {
    pub enum DataQualifierKind: i32 {
        None = 0,
        Average = 2,
        Excess = 4,
        HighThreshold = 5,
        LowThreshold = 7,
        Maximum = 8,
        Minimum = 9,
        Nominal = 11,
        Normal = 12,
        SecondMaximum = 16,
        SecondMinimum = 17,
        ThirdMaximum = 23,
        FourthMaximum = 24,
        FifthMaximum = 25,
        Sum = 26,
    }
}

coded_kind! {
    pub enum FlowDirectionKind: i32 {
        None = 0,
        Forward = 1,
        Lagging = 2,
        Leading = 3,
        Net = 4,
        Q1PlusQ2 = 5,
        Q1PlusQ3 = 7,
        Q1PlusQ4 = 8,
        Q1MinusQ4 = 9,
        Q2PlusQ3 = 10,
        Q2PlusQ4 = 11,
        Q2MinusQ3 = 12,
        Q3PlusQ4 = 13,
        Q3MinusQ2 = 14,
        Quadrant1 = 15,
        Quadrant2 = 16,
        Quadrant3 = 17,
        Quadrant4 = 18,
        Reverse = 19,
        Total = 20,
        TotalByPhase = 21,
    }
}

coded_kind! {
    /// What is being measured.
    ///
    /// `MfgAssignedPhysicalSerialNumber` and `DemandReset` both carry code
    /// 112 in the published code table; looking up 112 reports the
    /// ambiguity instead of picking one.
    pub enum MeasurementKind: i32 {
        None = 0,
        ApparentPowerFactor = 2,
        Currency = 3,
        Current = 4,
        CurrentAngle = 5,
        CurrentImbalance = 6,
        Date = 7,
        Demand = 8,
        Distance = 9,
        DistortionVoltAmperes = 10,
        Energization = 11,
        Energy = 12,
        EnergizationLoadSide = 13,
        Fan = 14,
        Frequency = 15,
        Funds = 16,
        Ieee1366Asai = 17,
        Ieee1366Asidi = 18,
        Ieee1366Asifi = 19,
        Ieee1366Caidi = 20,
        Ieee1366Caifi = 21,
        Ieee1366Cemin = 22,
        Ieee1366Cemsmin = 23,
        Ieee1366Ctaidi = 24,
        Ieee1366Maifi = 25,
        Ieee1366Maifie = 26,
        Ieee1366Saidi = 27,
        Ieee1366Saifi = 28,
        LineLoss = 31,
        Loss = 32,
        NegativeSequence = 33,
        PhasorPowerFactor = 34,
        PhasorReactivePower = 35,
        PositiveSequence = 36,
        Power = 37,
        PowerFactor = 38,
        QuantityPower = 40,
        Sag = 41,
        Swell = 42,
        SwitchPosition = 43,
        TapPosition = 44,
        TariffRate = 45,
        Temperature = 46,
        TotalHarmonicDistortion = 47,
        TransformerLoss = 48,
        UnipedeVoltageDip10To15 = 49,
        UnipedeVoltageDip15To30 = 50,
        UnipedeVoltageDip30To60 = 51,
        UnipedeVoltageDip60To90 = 52,
        UnipedeVoltageDip90To100 = 53,
        Voltage = 54,
        VoltageAngle = 55,
        VoltageExcursion = 56,
        VoltageImbalance = 57,
        Volume = 58,
        ZeroFlowDuration = 59,
        ZeroSequence = 60,
        DistortionPowerFactor = 64,
        FrequencyExcursion = 81,
        ApplicationContext = 90,
        ApTitle = 91,
        AssetNumber = 92,
        Bandwidth = 93,
        BatteryVoltage = 94,
        BroadcastAddress = 95,
        DeviceAddressType1 = 96,
        DeviceAddressType2 = 97,
        DeviceAddressType3 = 98,
        DeviceAddressType4 = 99,
        DeviceClass = 100,
        ElectronicSerialNumber = 101,
        EndDeviceId = 102,
        GroupAddressType1 = 103,
        GroupAddressType2 = 104,
        GroupAddressType3 = 105,
        GroupAddressType4 = 106,
        IpAddress = 107,
        MacAddress = 108,
        MfgAssignedConfigurationId = 109,
        MfgAssignedPhysicalSerialNumber = 112,
        MfgAssignedProductNumber = 113,
        MfgAssignedUniqueCommunicationAddress = 114,
        MultiCastAddress = 115,
        OneWayAddress = 116,
        SignalStrength = 117,
        TwoWayAddress = 118,
        SignalToNoiseRatio = 119,
        Alarm = 120,
        BatteryCarryover = 121,
        DataOverflowAlarm = 122,
        DemandLimit = 123,
        DemandReset = 112,
        Diagnostic = 125,
        EmergencyLimit = 126,
        EncoderTamper = 127,
        Ieee1366MomentaryInterruption = 128,
        Ieee1366MomentaryInterruptionEvent = 129,
        Ieee1366SustainedInterruption = 130,
        InterruptionBehaviour = 131,
        InversionTamper = 132,
        LoadInterrupt = 133,
        LoadShed = 134,
        Maintenance = 135,
        PhysicalTamper = 136,
        PowerLossTamper = 137,
        PowerOutage = 138,
        PowerQuality = 139,
        PowerRestoration = 140,
        Programmed = 141,
        PushButton = 142,
        RelayActivation = 143,
        RelayCycle = 144,
        RemovalTamper = 145,
        ReprogrammingTamper = 146,
        ReverseRotationTamper = 147,
        SwitchArmed = 148,
        SwitchDisabled = 149,
        Tamper = 150,
        WatchdogTimeout = 151,
        BillLastPeriod = 152,
        BillToDate = 153,
        BillCarryover = 154,
        ConnectionFee = 155,
        AudibleVolume = 156,
        VolumetricFlow = 157,
    }
}

coded_kind! {
    /// Phases carrying the measured quantity; codes are CIM bit masks.
    pub enum PhaseCodeKind: i32 {
        None = 0,
        Abcn = 225,
        Abc = 224,
        Abn = 193,
        Acn = 41,
        Bcn = 97,
        Ab = 132,
        Ac = 96,
        Bc = 66,
        An = 129,
        Bn = 65,
        Cn = 33,
        A = 128,
        B = 64,
        C = 32,
        N = 16,
        S2N = 272,
        S12N = 784,
        S1N = 528,
        S2 = 256,
        S12 = 768,
        S1 = 512,
    }
}

coded_kind! {
    /// Power-of-ten multiplier applied to stored values.
    pub enum UnitMultiplierKind: i32 {
        Pico = -12,
        Nano = -9,
        Micro = -6,
        Milli = -3,
        Centi = -2,
        Deci = -1,
        None = 0,
        Deca = 1,
        Hecto = 2,
        Kilo = 3,
        Mega = 6,
        Giga = 9,
        Tera = 12,
    }
}

coded_kind! {
    pub enum UnitSymbolKind: i32 {
        None = 0,
        Amperes = 5,
        Degrees = 9,
        Radians = 10,
        DegreesCelsius = 23,
        Farad = 25,
        Gram = 26,
        Seconds = 27,
        Henry = 28,
        Volts = 29,
        Ohm = 30,
        Joule = 31,
        Newton = 32,
        Siemens = 53,
        Watts = 38,
        Pascal = 39,
        Meter = 2,
        SquareMeter = 41,
        CubicMeter = 42,
        VoltAmperes = 61,
        VoltAmperesReactive = 63,
        CosTheta = 65,
        VoltSquared = 67,
        WattHours = 72,
        VoltAmpereHours = 71,
        VoltAmpereReactiveHours = 73,
        AmpereHours = 106,
        AmpereSquared = 69,
        Hertz = 33,
        Minutes = 159,
        Hours = 160,
        CubicMeterPerHour = 125,
        CubicFeet = 119,
        CubicFeetPerHour = 122,
        UsGallons = 128,
        UsGallonsPerHour = 129,
        ImperialGallons = 130,
        ImperialGallonsPerHour = 131,
        Btu = 132,
        BtuPerHour = 133,
        Liter = 134,
        LiterPerHour = 137,
        Therm = 169,
    }
}

coded_kind! {
    pub enum TimeAttributeKind: i32 {
        None = 0,
        TenMinute = 1,
        FifteenMinute = 2,
        TwentyFourHour = 4,
        ThirtyMinute = 5,
        SixtyMinute = 7,
        Daily = 11,
        Monthly = 13,
        Present = 15,
        Previous = 16,
        Weekly = 24,
        ForTheSpecifiedPeriod = 32,
        Daily30MinuteFixedBlock = 79,
    }
}

coded_kind! {
    /// Quality marker attached to an individual interval reading.
    pub enum QualityOfReading: i32 {
        Valid = 0,
        ManuallyEdited = 7,
        EstimatedUsingReferenceDay = 8,
        EstimatedUsingLinearInterpolation = 9,
        Questionable = 10,
        Derived = 11,
        Projected = 12,
        Mixed = 13,
        Raw = 14,
        NormalizedForWeather = 15,
        Other = 16,
        Validated = 17,
        Verified = 18,
        RevenueQuality = 19,
    }
}

coded_kind! {
    /// ISO 4217 numeric currency codes.
    pub enum CurrencyCode: i32 {
        Aud = 36,
        Cad = 124,
        Chf = 756,
        Cny = 156,
        Dkk = 208,
        Eur = 978,
        Gbp = 826,
        Inr = 356,
        Jpy = 392,
        Nok = 578,
        Rub = 643,
        Sek = 752,
        Usd = 840,
    }
}
