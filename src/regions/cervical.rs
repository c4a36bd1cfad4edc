//! Cervical spine rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "C_onset",
        source: MapSource::Single {
            question: "cervicalSpine.onset.type",
            options: &["roadTraffic", "otherTrauma", "wokeWith", "gradualOnset"],
        },
    },
    FieldMap {
        flat_id: "C_painSite",
        source: MapSource::Multi {
            question: "cervicalSpine.pain.site",
            options: &["neckCentral", "sideDominant", "scapular", "armBelowElbow"],
        },
    },
    FieldMap {
        flat_id: "C_armSymptoms",
        source: MapSource::Multi {
            question: "cervicalSpine.symptoms.arm",
            options: &["numbness", "pinsNeedles", "weakness"],
        },
    },
    // The vertebrobasilar screen is one canonical multi question; any
    // selected item is significant on its own.
    FieldMap {
        flat_id: "C_vbiSigns",
        source: MapSource::Multi {
            question: "cervicalSpine.redflags.fiveDs",
            options: &[
                "dizziness",
                "diplopia",
                "dysarthria",
                "dysphagia",
                "dropAttacks",
            ],
        },
    },
    FieldMap {
        flat_id: "C_headache",
        source: MapSource::YesNo {
            question: "cervicalSpine.symptoms.headache",
        },
    },
    FieldMap {
        flat_id: "C_rf_gaitBalance",
        source: MapSource::YesNo {
            question: "cervicalSpine.redflags.gaitBalance",
        },
    },
    FieldMap {
        flat_id: "C_rf_handClumsiness",
        source: MapSource::YesNo {
            question: "cervicalSpine.redflags.handClumsiness",
        },
    },
    FieldMap {
        flat_id: "C_rf_midlineTender",
        source: MapSource::YesNo {
            question: "cervicalSpine.redflags.midlineTenderAfterTrauma",
        },
    },
    FieldMap {
        flat_id: "C_rf_fever",
        source: MapSource::YesNo {
            question: "cervicalSpine.redflags.fever",
        },
    },
    FieldMap {
        flat_id: "C_rf_weightLoss",
        source: MapSource::YesNo {
            question: "cervicalSpine.redflags.weightLoss",
        },
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "mechanical_neck_pain",
        name: "Mechanical neck pain",
        base: 1.2,
        urgent_only: false,
        tests: &[
            "Active cervical range of motion",
            "Segmental palpation",
            "Deep neck flexor endurance test",
        ],
    },
    DifferentialInfo {
        key: "cervical_radiculopathy",
        name: "Cervical radiculopathy",
        base: 0.8,
        urgent_only: false,
        tests: &["Spurling's test", "Upper limb neurodynamic test", "Myotome and dermatome screen"],
    },
    DifferentialInfo {
        key: "whiplash_associated",
        name: "Whiplash-associated disorder",
        base: 0.6,
        urgent_only: false,
        tests: &["Active cervical range of motion", "Canadian C-spine rule"],
    },
    DifferentialInfo {
        key: "cervicogenic_headache",
        name: "Cervicogenic headache",
        base: 0.6,
        urgent_only: false,
        tests: &["Flexion-rotation test", "Upper cervical segmental palpation"],
    },
    DifferentialInfo {
        key: "myelopathy",
        name: "Cervical myelopathy",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent specialist referral", "Hoffmann's sign", "Gait and balance assessment"],
    },
    DifferentialInfo {
        key: "cervical_fracture",
        name: "Cervical spine fracture",
        base: 0.0,
        urgent_only: true,
        tests: &["Immobilize and refer urgently", "Canadian C-spine rule"],
    },
    DifferentialInfo {
        key: "vascular_pathology",
        name: "Cervical vascular pathology",
        base: 0.0,
        urgent_only: true,
        tests: &["Urgent medical referral", "Cranial nerve screen"],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Any(&[
            Pred::Yes("C_rf_gaitBalance"),
            Pred::Yes("C_rf_handClumsiness"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("myelopathy"),
        },
        reason: "Gait disturbance or hand clumsiness (possible cervical myelopathy)",
    },
    TriageRule {
        when: Pred::Any(&[
            Pred::MultiHas("C_vbiSigns", "dizziness"),
            Pred::MultiHas("C_vbiSigns", "diplopia"),
            Pred::MultiHas("C_vbiSigns", "dysarthria"),
            Pred::MultiHas("C_vbiSigns", "dysphagia"),
            Pred::MultiHas("C_vbiSigns", "dropAttacks"),
        ]),
        effect: TriageEffect::Red {
            forced: Some("vascular_pathology"),
        },
        reason: "Vertebrobasilar warning symptoms (5 Ds)",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("C_rf_midlineTender"),
            Pred::Any(&[
                Pred::SingleIs("C_onset", "roadTraffic"),
                Pred::SingleIs("C_onset", "otherTrauma"),
            ]),
        ]),
        effect: TriageEffect::Red {
            forced: Some("cervical_fracture"),
        },
        reason: "Midline tenderness after trauma (Canadian C-spine concern)",
    },
    TriageRule {
        when: Pred::All(&[Pred::Yes("C_rf_fever"), Pred::Yes("C_rf_weightLoss")]),
        effect: TriageEffect::Red { forced: None },
        reason: "Fever with unexplained weight loss",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::MultiHas("C_armSymptoms", "weakness"),
        effect: TriageEffect::Amber,
        reason: "Reported arm weakness",
    },
    TriageRule {
        when: Pred::SingleIs("C_onset", "roadTraffic"),
        effect: TriageEffect::Amber,
        reason: "Recent road traffic collision",
    },
    TriageRule {
        when: Pred::Yes("C_rf_fever"),
        effect: TriageEffect::Amber,
        reason: "Fever with neck pain",
    },
];

static GATES: &[GateRule] = &[GateRule {
    key: "cervical_radiculopathy",
    contradicted_when: Pred::All(&[
        Pred::MultiAnsweredWithout("C_painSite", "armBelowElbow"),
        Pred::Not(&Pred::MultiHas("C_armSymptoms", "pinsNeedles")),
        Pred::Not(&Pred::MultiHas("C_armSymptoms", "numbness")),
    ]),
    why: "No arm-dominant symptoms reported",
}];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "mechanical_neck_pain",
        when: Pred::Any(&[
            Pred::MultiHas("C_painSite", "neckCentral"),
            Pred::MultiHas("C_painSite", "sideDominant"),
        ]),
        delta: 1.5,
        why: "Neck-dominant pain",
    },
    ScoreRule {
        key: "mechanical_neck_pain",
        when: Pred::Any(&[
            Pred::SingleIs("C_onset", "wokeWith"),
            Pred::SingleIs("C_onset", "gradualOnset"),
        ]),
        delta: 1.0,
        why: "Non-traumatic onset",
    },
    ScoreRule {
        key: "cervical_radiculopathy",
        when: Pred::MultiHas("C_painSite", "armBelowElbow"),
        delta: 2.0,
        why: "Arm-dominant pain below the elbow",
    },
    ScoreRule {
        key: "cervical_radiculopathy",
        when: Pred::Any(&[
            Pred::MultiHas("C_armSymptoms", "pinsNeedles"),
            Pred::MultiHas("C_armSymptoms", "numbness"),
        ]),
        delta: 1.5,
        why: "Dermatomal pins and needles or numbness",
    },
    ScoreRule {
        key: "whiplash_associated",
        when: Pred::SingleIs("C_onset", "roadTraffic"),
        delta: 2.5,
        why: "Whiplash mechanism",
    },
    ScoreRule {
        key: "whiplash_associated",
        when: Pred::MultiHas("C_painSite", "scapular"),
        delta: 0.5,
        why: "Scapular pain referral",
    },
    ScoreRule {
        key: "cervicogenic_headache",
        when: Pred::Yes("C_headache"),
        delta: 2.0,
        why: "Headache accompanying neck pain",
    },
    ScoreRule {
        key: "cervicogenic_headache",
        when: Pred::MultiHas("C_painSite", "sideDominant"),
        delta: 0.5,
        why: "Side-dominant pattern",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "mechanical_neck_pain",
    when: Pred::All(&[
        Pred::MultiHas("C_painSite", "armBelowElbow"),
        Pred::Any(&[
            Pred::MultiHas("C_armSymptoms", "pinsNeedles"),
            Pred::MultiHas("C_armSymptoms", "numbness"),
        ]),
    ]),
    delta: -1.0,
    why: "Arm-dominant pattern argues against simple neck pain",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "cervicalSpine",
    label: "Cervical spine",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Active cervical range of motion",
            "Postural observation",
            "Segmental palpation",
        ],
        amber: &[
            "Active cervical range of motion",
            "Myotome and dermatome screen",
            "Reflex testing",
        ],
        red: &["Immediate neurological assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
            "Full neurological examination",
        ],
    },
};
