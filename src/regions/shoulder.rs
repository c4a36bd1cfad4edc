//! Shoulder rule tables.

use crate::core::differential::DifferentialInfo;
use crate::engine::rules::{
    FieldMap, GateRule, MapSource, Pred, RegionSpec, ScoreRule, TriageEffect, TriageRule,
    TriageTests,
};

static ADAPTER: &[FieldMap] = &[
    FieldMap {
        flat_id: "S_mech",
        source: MapSource::Single {
            question: "shoulder.mechanism.type",
            options: &[
                "fallDirect",
                "overheadLoad",
                "lifting",
                "dislocationEvent",
                "gradualOnset",
            ],
        },
    },
    FieldMap {
        flat_id: "S_painSite",
        source: MapSource::Multi {
            question: "shoulder.pain.site",
            options: &[
                "deltoidLateral",
                "superiorACJ",
                "anteriorJoint",
                "scapular",
                "diffuse",
            ],
        },
    },
    FieldMap {
        flat_id: "S_overheadPain",
        source: MapSource::YesNo {
            question: "shoulder.symptoms.overheadPain",
        },
    },
    FieldMap {
        flat_id: "S_nightPain",
        source: MapSource::YesNo {
            question: "shoulder.pain.night",
        },
    },
    FieldMap {
        flat_id: "S_stiffGlobal",
        source: MapSource::YesNo {
            question: "shoulder.symptoms.globalStiffness",
        },
    },
    FieldMap {
        flat_id: "S_weakLift",
        source: MapSource::YesNo {
            question: "shoulder.function.cannotLiftArm",
        },
    },
    FieldMap {
        flat_id: "S_instabilityFeeling",
        source: MapSource::YesNo {
            question: "shoulder.symptoms.feelsUnstable",
        },
    },
    FieldMap {
        flat_id: "S_numbArm",
        source: MapSource::YesNo {
            question: "shoulder.symptoms.numbArm",
        },
    },
    FieldMap {
        flat_id: "S_rf_hotRedFever",
        source: MapSource::YesNo {
            question: "shoulder.redflags.hotRedFever",
        },
    },
    FieldMap {
        flat_id: "S_rf_deformity",
        source: MapSource::YesNo {
            question: "shoulder.redflags.deformity",
        },
    },
    FieldMap {
        flat_id: "S_rf_weightLoss",
        source: MapSource::YesNo {
            question: "shoulder.redflags.weightLoss",
        },
    },
    FieldMap {
        flat_id: "S_rf_constantPain",
        source: MapSource::YesNo {
            question: "shoulder.redflags.constantNonMechanicalPain",
        },
    },
    // Age band drives frozen-shoulder and cuff-tear priors but is not yet
    // collected by the questionnaire.
    FieldMap {
        flat_id: "S_ageBand",
        source: MapSource::MissingSingle,
    },
];

static REGISTRY: &[DifferentialInfo] = &[
    DifferentialInfo {
        key: "rotator_cuff_related",
        name: "Rotator-cuff-related shoulder pain",
        base: 1.2,
        urgent_only: false,
        tests: &["Painful arc assessment", "Resisted external rotation", "Hawkins-Kennedy test"],
    },
    DifferentialInfo {
        key: "frozen_shoulder",
        name: "Frozen shoulder (adhesive capsulitis)",
        base: 0.8,
        urgent_only: false,
        tests: &["Passive external rotation range", "Capsular pattern assessment"],
    },
    DifferentialInfo {
        key: "acj_sprain",
        name: "Acromioclavicular joint sprain",
        base: 0.7,
        urgent_only: false,
        tests: &["ACJ palpation", "Scarf (cross-body adduction) test"],
    },
    DifferentialInfo {
        key: "instability",
        name: "Shoulder instability",
        base: 0.7,
        urgent_only: false,
        tests: &["Apprehension and relocation test", "Sulcus sign"],
    },
    DifferentialInfo {
        key: "cuff_tear_traumatic",
        name: "Traumatic rotator cuff tear",
        base: 0.5,
        urgent_only: false,
        tests: &["Drop arm test", "External rotation lag sign"],
    },
    DifferentialInfo {
        key: "referred_cervical",
        name: "Referred pain from the cervical spine",
        base: 0.5,
        urgent_only: false,
        tests: &["Cervical spine screen", "Spurling's test"],
    },
    DifferentialInfo {
        key: "dislocation",
        name: "Shoulder dislocation or fracture",
        base: 0.0,
        urgent_only: true,
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
        when: Pred::Yes("S_rf_hotRedFever"),
        effect: TriageEffect::Red {
            forced: Some("inflammatory_infection"),
        },
        reason: "Hot, red joint with fever",
    },
    TriageRule {
        when: Pred::Yes("S_rf_deformity"),
        effect: TriageEffect::Red {
            forced: Some("dislocation"),
        },
        reason: "Visible deformity after injury (possible dislocation or fracture)",
    },
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("S_rf_constantPain"),
            Pred::Yes("S_rf_weightLoss"),
        ]),
        effect: TriageEffect::Red { forced: None },
        reason: "Constant night pain with systemic features",
    },
];

static AMBER_RULES: &[TriageRule] = &[
    TriageRule {
        when: Pred::All(&[
            Pred::Yes("S_weakLift"),
            Pred::SingleIs("S_mech", "fallDirect"),
        ]),
        effect: TriageEffect::Amber,
        reason: "Unable to actively lift the arm after injury (possible large cuff tear)",
    },
    TriageRule {
        when: Pred::Yes("S_numbArm"),
        effect: TriageEffect::Amber,
        reason: "Arm numbness or tingling",
    },
    TriageRule {
        when: Pred::Yes("S_rf_constantPain"),
        effect: TriageEffect::Amber,
        reason: "Constant non-mechanical pain",
    },
];

static GATES: &[GateRule] = &[
    GateRule {
        key: "acj_sprain",
        contradicted_when: Pred::MultiAnsweredWithout("S_painSite", "superiorACJ"),
        why: "Pain is not localized to the ACJ",
    },
    GateRule {
        key: "rotator_cuff_related",
        contradicted_when: Pred::All(&[
            Pred::MultiAnsweredWithout("S_painSite", "deltoidLateral"),
            Pred::MultiAnsweredWithout("S_painSite", "anteriorJoint"),
        ]),
        why: "Pain location does not fit a cuff pattern",
    },
];

static RULES: &[ScoreRule] = &[
    ScoreRule {
        key: "rotator_cuff_related",
        when: Pred::SingleIs("S_mech", "overheadLoad"),
        delta: 1.5,
        why: "Overhead loading history",
    },
    ScoreRule {
        key: "rotator_cuff_related",
        when: Pred::MultiHas("S_painSite", "deltoidLateral"),
        delta: 1.5,
        why: "Lateral deltoid region pain",
    },
    ScoreRule {
        key: "rotator_cuff_related",
        when: Pred::Yes("S_overheadPain"),
        delta: 1.5,
        why: "Painful arc with overhead use",
    },
    ScoreRule {
        key: "rotator_cuff_related",
        when: Pred::Yes("S_nightPain"),
        delta: 0.5,
        why: "Night pain lying on the shoulder",
    },
    ScoreRule {
        key: "frozen_shoulder",
        when: Pred::Yes("S_stiffGlobal"),
        delta: 2.0,
        why: "Global stiffness pattern",
    },
    ScoreRule {
        key: "frozen_shoulder",
        when: Pred::SingleIs("S_mech", "gradualOnset"),
        delta: 1.0,
        why: "Gradual onset without injury",
    },
    ScoreRule {
        key: "frozen_shoulder",
        when: Pred::Yes("S_nightPain"),
        delta: 1.0,
        why: "Night-dominant pain",
    },
    ScoreRule {
        key: "frozen_shoulder",
        when: Pred::SingleIs("S_ageBand", "over40"),
        delta: 1.0,
        why: "Typical age group",
    },
    ScoreRule {
        key: "acj_sprain",
        when: Pred::MultiHas("S_painSite", "superiorACJ"),
        delta: 2.0,
        why: "Pain localized to the ACJ",
    },
    ScoreRule {
        key: "acj_sprain",
        when: Pred::SingleIs("S_mech", "fallDirect"),
        delta: 1.5,
        why: "Fall onto the point of the shoulder",
    },
    ScoreRule {
        key: "instability",
        when: Pred::SingleIs("S_mech", "dislocationEvent"),
        delta: 2.0,
        why: "Previous dislocation event",
    },
    ScoreRule {
        key: "instability",
        when: Pred::Yes("S_instabilityFeeling"),
        delta: 1.5,
        why: "Shoulder feels unstable",
    },
    ScoreRule {
        key: "cuff_tear_traumatic",
        when: Pred::SingleIs("S_mech", "fallDirect"),
        delta: 1.0,
        why: "Traumatic onset",
    },
    ScoreRule {
        key: "cuff_tear_traumatic",
        when: Pred::Yes("S_weakLift"),
        delta: 2.0,
        why: "Marked weakness lifting the arm",
    },
    ScoreRule {
        key: "referred_cervical",
        when: Pred::MultiHas("S_painSite", "scapular"),
        delta: 1.5,
        why: "Scapular-dominant pain",
    },
    ScoreRule {
        key: "referred_cervical",
        when: Pred::Yes("S_numbArm"),
        delta: 1.0,
        why: "Arm numbness or tingling",
    },
];

static SUPPRESSIONS: &[ScoreRule] = &[ScoreRule {
    key: "frozen_shoulder",
    when: Pred::SingleIs("S_mech", "dislocationEvent"),
    delta: -1.0,
    why: "Instability history argues against a capsular pattern",
}];

pub static SPEC: RegionSpec = RegionSpec {
    name: "shoulder",
    label: "Shoulder",
    adapter: ADAPTER,
    registry: REGISTRY,
    red_rules: RED_RULES,
    amber_rules: AMBER_RULES,
    gates: GATES,
    rules: RULES,
    suppressions: SUPPRESSIONS,
    default_tests: TriageTests {
        green: &[
            "Observation and postural screen",
            "Active and passive range of motion",
            "Resisted isometric testing",
        ],
        amber: &[
            "Observation and postural screen",
            "Cervical spine screen",
            "Neurovascular screen",
        ],
        red: &["Immediate neurovascular assessment"],
        red_checklist: &[
            "Urgent same-day medical review",
            "Vital signs (temperature, heart rate, blood pressure)",
        ],
    },
};
