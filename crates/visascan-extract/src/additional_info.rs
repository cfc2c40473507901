//! Static supplementary-topic list attached to every result.

/// A supplementary topic: stable key, English title, and the section anchor
/// on the source page.
#[derive(Debug, Clone, Copy)]
pub struct AdditionalInfoSection {
    pub key: &'static str,
    pub title: &'static str,
    pub anchor: &'static str,
}

/// The seven fixed topics. Every result links exactly these, in this order,
/// regardless of whether the destination row was found.
pub const ADDITIONAL_INFO_SECTIONS: [AdditionalInfoSection; 7] = [
    AdditionalInfoSection {
        key: "maximum_passport_age",
        title: "Maximum passport age",
        anchor: "Maximum_passport_age",
    },
    AdditionalInfoSection {
        key: "blank_passport_pages",
        title: "Blank passport pages",
        anchor: "Blank_passport_pages",
    },
    AdditionalInfoSection {
        key: "vaccination",
        title: "Vaccination",
        anchor: "Vaccination",
    },
    AdditionalInfoSection {
        key: "criminal_record",
        title: "Criminal record",
        anchor: "Criminal_record",
    },
    AdditionalInfoSection {
        key: "persona_non_grata",
        title: "Persona non grata",
        anchor: "Persona_non_grata",
    },
    AdditionalInfoSection {
        key: "israeli_stamps",
        title: "Israeli stamps",
        anchor: "Israeli_stamps",
    },
    AdditionalInfoSection {
        key: "biometrics",
        title: "Biometrics",
        anchor: "Biometrics",
    },
];
