//! Wrist and hand rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "W_mech",
        source: MapSource::Single {
            question: "wrist.mechanism.type",
            options: &["fallOutstretched", "twist", "repetitiveLoad", "gradualOnset"],
        },
    },
    FieldMap {
        flat_id: "W_painSite",
        source: MapSource::Multi {
            question: "wrist.pain.site",
            options: &[
                "radialStyloid",
                "snuffbox",
                "ulnarSide",
                "dorsalCentral",
                "volarCarpal",
            ],
        },
    },
    FieldMap {
        flat_id: "W_numbThumbIndex",
        source: MapSource::YesNo {
            question: "wrist.symptoms.numbThumbIndex",
        },
    },
    FieldMap {
        flat_id: "W_nightTingling",
        source: MapSource::YesNo {
            question: "wrist.symptoms.nightTingling",
        },
    },
    FieldMap {
        flat_id: "W_gripWeak",
        source: MapSource::YesNo {
            question: "wrist.function.gripWeak",
        },
    },
    FieldMap {
        flat_id: "W_clicking",
        source: MapSource::YesNo {
            question: "wrist.symptoms.clicking",
        },
    },
    FieldMap {
        flat_id: "W_swelling",
        source: MapSource::YesNo {
            question: "wrist.swelling.present",
        },
    },
    FieldMap {
        flat_id: "W_rf_deformity",
        source: MapSource::YesNo {
            question: "wrist.redflags.deformity",
        },
    },
    FieldMap {
        flat_id: "W_rf_hotRedFever",
        source: MapSource::YesNo {
            question: "wrist.redflags.hotRedFever",
        },
    },
    // Pregnancy and thyroid history raise carpal tunnel priors but are not
    // yet collected by the questionnaire.
    FieldMap {
        flat_id: "W_ctsRisk",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "scaphoid_injury",
        name: "Scaphoid injury",
        base: 0.5,
        urgent_only: false,
        tests: &[
            "Anatomical snuffbox palpation",
            "Scaphoid tubercle palpation",
            "Axial thumb compression",
        ],
    },
    DifferentialInfo {
        key: "dequervain",
        name: "De Quervain's tenosynovitis",
        base: 0.8,
        urgent_only: false,
        tests: &["Finkelstein test", "Palpation of the first extensor compartment"],
    },
    DifferentialInfo {
        key: "carpal_tunnel",
        name: "Carpal tunnel syndrome",
        base: 0.8,
        urgent_only: false,
        tests: &["Phalen's test", "Tinel's sign at the carpal tunnel"],
    },
    DifferentialInfo {
        key: "tfcc_injury",
        name: "TFCC injury",
        base: 0.7,
        urgent_only: false,
        tests: &["TFCC compression test", "Piano key test"],
    },
    DifferentialInfo {
        key: "wrist_oa",
        name: "Degenerative wrist change",
        base: 0.5,
        urgent_only: false,
        tests: &["Active and passive range of motion", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "fracture_distal_radius",
        name: "Distal radius fracture",
        base: 0.3,
        urgent_only: false,
        tests: &["Urgent orthopaedic review", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "inflammatory_infection",
        name: "Inflammatory or septic arthritis",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Urgent bloods (CRP/ESR, white cell count)",
            "Joint aspiration",
        ],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Yes("W_rf_deformity"),
        effect: TriageEffect::Red {
            forced: Some("fracture_distal_radius"),
        },
        reason: "Obvious wrist deformity after a fall",
    },
    TriageRule {
        when: Pred::Yes("W_rf_hotRedFever"),
        effect: TriageEffect::Red {
            forced: Some("inflammatory_infection"),
        },
        reason: "Hot, red joint with fever",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::All(&[
            Pred::MultiHas("W_painSite", "snuffbox"),
            Pred::SingleIs("W_mech", "fallOutstretched"),
        ]),
        effect: TriageEffect::Amber,
        reason: "Anatomical snuffbox tenderness after a fall",
    },
    TriageRule {
        when: Pred::All(&[Pred::Yes("W_numbThumbIndex"), Pred::Yes("W_gripWeak")]),
        effect: TriageEffect::Amber,
        reason: "Sensory change with grip weakness",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "dequervain",
        contradicted_when: Pred::MultiAnsweredWithout("W_painSite", "radialStyloid"),
        why: "Pain location does not fit a radial pattern",
    },
    GateRule {
        key: "tfcc_injury",
        contradicted_when: Pred::MultiAnsweredWithout("W_painSite", "ulnarSide"),
        why: "Pain location does not fit an ulnar pattern",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "scaphoid_injury",
        when: Pred::MultiHas("W_painSite", "snuffbox"),
        delta: 2.5,
        why: "Anatomical snuffbox tenderness",
    },
    ScoreRule {
        key: "scaphoid_injury",
        when: Pred::SingleIs("W_mech", "fallOutstretched"),
        delta: 2.0,
        why: "Fall on the outstretched hand",
    },
    ScoreRule {
        key: "dequervain",
        when: Pred::MultiHas("W_painSite", "radialStyloid"),
        delta: 2.0,
        why: "Radial styloid pain",
    },
    ScoreRule {
        key: "dequervain",
        when: Pred::SingleIs("W_mech", "repetitiveLoad"),
        delta: 1.5,
        why: "Repetitive thumb and wrist load",
    },
    ScoreRule {
        key: "dequervain",
        when: Pred::Yes("W_gripWeak"),
        delta: 0.5,
        why: "Painful grip",
    },
    ScoreRule {
        key: "carpal_tunnel",
        when: Pred::Yes("W_numbThumbIndex"),
        delta: 2.0,
        why: "Median-distribution numbness",
    },
    ScoreRule {
        key: "carpal_tunnel",
        when: Pred::Yes("W_nightTingling"),
        delta: 1.5,
        why: "Night tingling relieved by shaking the hand",
    },
    ScoreRule {
        key: "carpal_tunnel",
        when: Pred::Yes("W_ctsRisk"),
        delta: 1.0,
        why: "Risk factors for nerve compression",
    },
    ScoreRule {
        key: "tfcc_injury",
        when: Pred::MultiHas("W_painSite", "ulnarSide"),
        delta: 2.0,
        why: "Ulnar-sided wrist pain",
    },
    ScoreRule {
        key: "tfcc_injury",
        when: Pred::SingleIs("W_mech", "twist"),
        delta: 1.5,
        why: "Twisting or loaded rotation injury",
    },
    ScoreRule {
        key: "tfcc_injury",
        when: Pred::Yes("W_clicking"),
        delta: 1.0,
        why: "Clicking with forearm rotation",
    },
    ScoreRule {
        key: "wrist_oa",
        when: Pred::SingleIs("W_mech", "gradualOnset"),
        delta: 1.5,
        why: "Gradual onset of symptoms",
    },
    ScoreRule {
        key: "wrist_oa",
        when: Pred::MultiHas("W_painSite", "dorsalCentral"),
        delta: 1.0,
        why: "Central dorsal wrist pain",
    },
    ScoreRule {
        key: "fracture_distal_radius",
        when: Pred::SingleIs("W_mech", "fallOutstretched"),
        delta: 1.5,
        why: "Fall on the outstretched hand",
    },
    ScoreRule {
        key: "fracture_distal_radius",
        when: Pred::Yes("W_swelling"),
        delta: 1.0,
        why: "Swelling after injury",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "dequervain",
    when: Pred::All(&[
        Pred::MultiHas("W_painSite", "snuffbox"),
        Pred::SingleIs("W_mech", "fallOutstretched"),
    ]),
    delta: -1.0,
    why: "Scaphoid pattern takes precedence over tendinopathy",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "wrist",
    label: "Wrist and hand",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Observation and palpation",
            "Active and passive range of motion",
            "Grip strength comparison",
        ],
        amber: &[
            "Observation and palpation",
            "Anatomical snuffbox palpation",
            "Neurovascular screen",
        ],
        red: &["Immediate neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
