//! Thoracic spine rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "T_onset",
        source: MapSource::Single {
            question: "thoracicSpine.onset.type",
            options: &["trauma", "suddenNonMechanical", "gradualOnset"],
        },
    },
    FieldMap {
        flat_id: "T_painSite",
        source: MapSource::Multi {
            question: "thoracicSpine.pain.site",
            options: &["midlineThoracic", "paraspinal", "ribChestWall"],
        },
    },
    FieldMap {
        flat_id: "T_breathPain",
        source: MapSource::YesNo {
            question: "thoracicSpine.symptoms.painOnDeepBreath",
        },
    },
    FieldMap {
        flat_id: "T_coughSneezePain",
        source: MapSource::YesNo {
            question: "thoracicSpine.symptoms.painOnCoughSneeze",
        },
    },
    FieldMap {
        flat_id: "T_osteoporosisRisk",
        source: MapSource::YesNo {
            question: "thoracicSpine.history.osteoporosisRisk",
        },
    },
    FieldMap {
        flat_id: "T_rf_chestPressure",
        source: MapSource::YesNo {
            question: "thoracicSpine.redflags.chestPressure",
        },
    },
    FieldMap {
        flat_id: "T_rf_fever",
        source: MapSource::YesNo {
            question: "thoracicSpine.redflags.fever",
        },
    },
    FieldMap {
        flat_id: "T_rf_weightLoss",
        source: MapSource::YesNo {
            question: "thoracicSpine.redflags.weightLoss",
        },
    },
    FieldMap {
        flat_id: "T_rf_nightConstant",
        source: MapSource::YesNo {
            question: "thoracicSpine.redflags.constantNightPain",
        },
    },
    // Cancer history raises the malignancy prior but is not yet collected
    // by the questionnaire.
    FieldMap {
        flat_id: "T_cancerHistory",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "thoracic_mechanical",
        name: "Mechanical thoracic pain",
        base: 1.2,
        urgent_only: false,
        tests: &[
            "Active thoracic range of motion",
            "Segmental palpation",
            "Postural observation",
        ],
    },
    DifferentialInfo {
        key: "costovertebral_rib",
        name: "Costovertebral or rib dysfunction",
        base: 0.8,
        urgent_only: false,
        tests: &["Rib spring test", "Deep inspiration range assessment"],
    },
    DifferentialInfo {
        key: "compression_fracture",
        name: "Vertebral compression fracture",
        base: 0.4,
        urgent_only: false,
        tests: &["Midline percussion tenderness", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "visceral_referral",
        name: "Visceral referral (cardiac/pulmonary concern)",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent medical referral", "Vital signs and ECG"],
    },
    DifferentialInfo {
        key: "spinal_infection",
        name: "Spinal infection",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Urgent bloods (CRP/ESR, white cell count)",
            "Urgent spinal imaging",
        ],
    },
    DifferentialInfo {
        key: "malignancy_concern",
        name: "Possible spinal malignancy",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent medical referral", "Urgent spinal imaging"],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("T_rf_chestPressure"),
            Pred::SingleIs("T_onset", "suddenNonMechanical"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("visceral_referral"),
        },
        reason: "Sudden non-mechanical chest symptoms (possible visceral cause)",
    },
    TriageRule {
        when: Pred::Yes("T_rf_fever"),
        effect: TriageEffect::Red {
            forced: Some("spinal_infection"),
        },
        reason: "Fever with spinal pain (possible infection)",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("T_rf_nightConstant"),
            Pred::Yes("T_rf_weightLoss"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("malignancy_concern"),
        },
        reason: "Constant night pain with weight loss",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Yes("T_rf_chestPressure"),
        effect: TriageEffect::Amber,
        reason: "Chest pressure symptoms reported",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("T_osteoporosisRisk"),
            Pred::Any(&[
                Pred::SingleIs("T_onset", "trauma"),
                Pred::SingleIs("T_onset", "suddenNonMechanical"),
            ]),
        ]),
        effect: TriageEffect::Amber,
        reason: "Sudden pain with osteoporosis risk factors",
    },
    TriageRule {
        when: Pred::Yes("T_rf_nightConstant"),
        effect: TriageEffect::Amber,
        reason: "Constant night pain",
    },
];

static GATES: &[GateRule] = &[GateRule {
    key: "costovertebral_rib",
    contradicted_when: Pred::MultiAnsweredWithout("T_painSite", "ribChestWall"),
    why: "No rib or chest wall pain reported",
}];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "thoracic_mechanical",
        when: Pred::MultiHas("T_painSite", "paraspinal"),
        delta: 1.5,
        why: "Paraspinal-dominant pain",
    },
    ScoreRule {
        key: "thoracic_mechanical",
        when: Pred::SingleIs("T_onset", "gradualOnset"),
        delta: 1.0,
        why: "Gradual mechanical onset",
    },
    ScoreRule {
        key: "costovertebral_rib",
        when: Pred::MultiHas("T_painSite", "ribChestWall"),
        delta: 2.0,
        why: "Rib or chest wall pain",
    },
    ScoreRule {
        key: "costovertebral_rib",
        when: Pred::Yes("T_breathPain"),
        delta: 1.5,
        why: "Pain on deep breathing",
    },
    ScoreRule {
        key: "costovertebral_rib",
        when: Pred::Yes("T_coughSneezePain"),
        delta: 1.0,
        why: "Pain on coughing or sneezing",
    },
    ScoreRule {
        key: "compression_fracture",
        when: Pred::Yes("T_osteoporosisRisk"),
        delta: 2.0,
        why: "Osteoporosis risk factors",
    },
    ScoreRule {
        key: "compression_fracture",
        when: Pred::Any(&[
            Pred::SingleIs("T_onset", "trauma"),
            Pred::SingleIs("T_onset", "suddenNonMechanical"),
        ]),
        delta: 1.5,
        why: "Sudden or traumatic onset",
    },
    ScoreRule {
        key: "compression_fracture",
        when: Pred::MultiHas("T_painSite", "midlineThoracic"),
        delta: 1.0,
        why: "Midline thoracic pain",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "thoracic_mechanical",
    when: Pred::All(&[
        Pred::Yes("T_osteoporosisRisk"),
        Pred::MultiHas("T_painSite", "midlineThoracic"),
        Pred::Any(&[
            Pred::SingleIs("T_onset", "trauma"),
            Pred::SingleIs("T_onset", "suddenNonMechanical"),
        ]),
    ]),
    delta: -1.0,
    why: "Fragility fracture pattern argues against simple mechanical pain",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "thoracicSpine",
    label: "Thoracic spine",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Active thoracic range of motion",
            "Postural observation",
            "Segmental palpation",
        ],
        amber: &[
            "Active thoracic range of motion",
            "Midline percussion tenderness",
            "Respiratory screen",
        ],
        red: &["Immediate medical assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
