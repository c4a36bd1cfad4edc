//! Elbow rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "E_mech",
        source: MapSource::Single {
            question: "elbow.mechanism.type",
            options: &[
                "fallOutstretched",
                "repetitiveGrip",
                "directBlow",
                "gradualOnset",
            ],
        },
    },
    FieldMap {
        flat_id: "E_painSite",
        source: MapSource::Multi {
            question: "elbow.pain.site",
            options: &[
                "lateralEpicondyle",
                "medialEpicondyle",
                "posteriorOlecranon",
                "diffuse",
            ],
        },
    },
    FieldMap {
        flat_id: "E_gripPain",
        source: MapSource::YesNo {
            question: "elbow.symptoms.gripPain",
        },
    },
    FieldMap {
        flat_id: "E_locking",
        source: MapSource::YesNo {
            question: "elbow.symptoms.locking",
        },
    },
    FieldMap {
        flat_id: "E_numbHand",
        source: MapSource::YesNo {
            question: "elbow.symptoms.numbUlnarHand",
        },
    },
    FieldMap {
        flat_id: "E_swellingOlecranon",
        source: MapSource::YesNo {
            question: "elbow.swelling.olecranon",
        },
    },
    FieldMap {
        flat_id: "E_cantExtend",
        source: MapSource::YesNo {
            question: "elbow.function.cannotFullyExtend",
        },
    },
    FieldMap {
        flat_id: "E_rf_fever",
        source: MapSource::YesNo {
            question: "elbow.redflags.fever",
        },
    },
    FieldMap {
        flat_id: "E_rf_deformity",
        source: MapSource::YesNo {
            question: "elbow.redflags.deformity",
        },
    },
    // Occupational load history is not yet collected; the tendinopathy rule
    // reading it stays dormant until the question set is extended.
    FieldMap {
        flat_id: "E_manualWork",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "lateral_epicondylalgia",
        name: "Lateral epicondylalgia (tennis elbow)",
        base: 1.0,
        urgent_only: false,
        tests: &["Cozen's test", "Resisted wrist extension", "Grip dynamometry"],
    },
    DifferentialInfo {
        key: "medial_epicondylalgia",
        name: "Medial epicondylalgia (golfer's elbow)",
        base: 0.8,
        urgent_only: false,
        tests: &["Resisted wrist flexion", "Palpation of the medial epicondyle"],
    },
    DifferentialInfo {
        key: "olecranon_bursitis",
        name: "Olecranon bursitis",
        base: 0.6,
        urgent_only: false,
        tests: &["Inspection and palpation of the olecranon", "Skin temperature check"],
    },
    DifferentialInfo {
        key: "cubital_tunnel",
        name: "Cubital tunnel syndrome",
        base: 0.6,
        urgent_only: false,
        tests: &["Elbow flexion test", "Tinel's sign at the cubital tunnel"],
    },
    DifferentialInfo {
        key: "loose_body_oa",
        name: "Loose body or degenerative change",
        base: 0.5,
        urgent_only: false,
        tests: &["Active and passive range of motion", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "radial_head_fracture",
        name: "Radial head fracture",
        base: 0.3,
        urgent_only: false,
        tests: &["Extension deficit check", "Plain radiograph (X-ray)"],
    },
    DifferentialInfo {
        key: "acute_red_pathway",
        name: "Acute red-flag pathway (septic or traumatic joint)",
        base: 0.0,
        urgent_only: true,
        tests: &[
            "Urgent bloods (CRP/ESR, white cell count)",
            "Joint aspiration",
            "Plain radiograph (X-ray)",
        ],
    },
];

static RED_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::Yes("E_rf_fever"),
        effect: TriageEffect::Red {
            forced: Some("acute_red_pathway"),
        },
        reason: "Fever / hot, red joint",
    },
    TriageRule {
        when: Pred::Yes("E_rf_deformity"),
        effect: TriageEffect::Red {
            forced: Some("acute_red_pathway"),
        },
        reason: "Obvious deformity after trauma",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("E_cantExtend"),
            Pred::SingleIs("E_mech", "fallOutstretched"),
        ]),
        effect: TriageEffect::Amber,
        reason: "Unable to fully extend the elbow after a fall",
    },
    TriageRule {
        when: Pred::Yes("E_numbHand"),
        effect: TriageEffect::Amber,
        reason: "Ulnar-side numbness or tingling",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "lateral_epicondylalgia",
        contradicted_when: Pred::MultiAnsweredWithout("E_painSite", "lateralEpicondyle"),
        why: "Pain location does not fit a lateral pattern",
    },
    GateRule {
        key: "medial_epicondylalgia",
        contradicted_when: Pred::MultiAnsweredWithout("E_painSite", "medialEpicondyle"),
        why: "Pain location does not fit a medial pattern",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "lateral_epicondylalgia",
        when: Pred::MultiHas("E_painSite", "lateralEpicondyle"),
        delta: 2.0,
        why: "Lateral epicondyle pain",
    },
    ScoreRule {
        key: "lateral_epicondylalgia",
        when: Pred::SingleIs("E_mech", "repetitiveGrip"),
        delta: 1.5,
        why: "Repetitive gripping history",
    },
    ScoreRule {
        key: "lateral_epicondylalgia",
        when: Pred::Yes("E_gripPain"),
        delta: 1.0,
        why: "Pain on gripping",
    },
    ScoreRule {
        key: "lateral_epicondylalgia",
        when: Pred::Yes("E_manualWork"),
        delta: 1.0,
        why: "Heavy manual work",
    },
    ScoreRule {
        key: "medial_epicondylalgia",
        when: Pred::MultiHas("E_painSite", "medialEpicondyle"),
        delta: 2.0,
        why: "Medial epicondyle pain",
    },
    ScoreRule {
        key: "medial_epicondylalgia",
        when: Pred::SingleIs("E_mech", "repetitiveGrip"),
        delta: 1.0,
        why: "Repetitive gripping history",
    },
    ScoreRule {
        key: "olecranon_bursitis",
        when: Pred::Yes("E_swellingOlecranon"),
        delta: 2.0,
        why: "Focal olecranon swelling",
    },
    ScoreRule {
        key: "olecranon_bursitis",
        when: Pred::MultiHas("E_painSite", "posteriorOlecranon"),
        delta: 1.5,
        why: "Posterior olecranon pain",
    },
    ScoreRule {
        key: "cubital_tunnel",
        when: Pred::Yes("E_numbHand"),
        delta: 2.0,
        why: "Ulnar-side numbness or tingling",
    },
    ScoreRule {
        key: "cubital_tunnel",
        when: Pred::MultiHas("E_painSite", "medialEpicondyle"),
        delta: 0.5,
        why: "Medial-sided symptoms",
    },
    ScoreRule {
        key: "loose_body_oa",
        when: Pred::Yes("E_locking"),
        delta: 2.0,
        why: "Mechanical locking or catching",
    },
    ScoreRule {
        key: "loose_body_oa",
        when: Pred::SingleIs("E_mech", "gradualOnset"),
        delta: 0.5,
        why: "Gradual onset of symptoms",
    },
    ScoreRule {
        key: "radial_head_fracture",
        when: Pred::SingleIs("E_mech", "fallOutstretched"),
        delta: 2.0,
        why: "Fall on the outstretched hand",
    },
    ScoreRule {
        key: "radial_head_fracture",
        when: Pred::Yes("E_cantExtend"),
        delta: 1.5,
        why: "Loss of full extension",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "lateral_epicondylalgia",
    when: Pred::All(&[
        Pred::SingleIs("E_mech", "fallOutstretched"),
        Pred::Yes("E_cantExtend"),
    ]),
    delta: -1.0,
    why: "Traumatic extension block favours fracture work-up",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "elbow",
    label: "Elbow",
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
            "Resisted isometric testing",
        ],
        amber: &[
            "Observation and palpation",
            "Extension deficit check",
            "Neurovascular screen",
        ],
        red: &["Immediate neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
