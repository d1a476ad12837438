//! Demo call fixtures seeding the catalog.

use common::CallId;
use domain::{
    CallHandling, CallRecord, CallSummary, CallerProfile, RiskAssessment, RiskDimension, Speaker,
    SummarySections, TranscriptTurn,
};

fn turn(speaker: Speaker, text: &str) -> TranscriptTurn {
    TranscriptTurn {
        speaker,
        text: text.to_string(),
    }
}

fn grief_call() -> CallRecord {
    CallRecord {
        call_id: CallId::new("CALL-2025-001"),
        started_at: "2025-10-15T09:15:00-07:00".parse().expect("fixture timestamp"),
        ended_at: "2025-10-15T09:47:00-07:00".parse().expect("fixture timestamp"),
        duration_sec: 1920,
        channel: "phone".to_string(),
        language: "en".to_string(),
        timezone: "America/Los_Angeles".to_string(),
        caller_profile: CallerProfile {
            age_range: "65-70".to_string(),
            gender: "female".to_string(),
            notes: "Recently widowed, lives alone".to_string(),
        },
        turns: vec![
            turn(
                Speaker::Responder,
                "Crisis hotline, this is Sarah. I'm here to listen. How can I help you today?",
            ),
            turn(
                Speaker::Caller,
                "My husband passed away six months ago. I don't know how to do this life without him.",
            ),
            turn(
                Speaker::Responder,
                "I'm so sorry for your loss. Can you tell me what keeps you going right now?",
            ),
            turn(
                Speaker::Caller,
                "Sometimes I think it would be easier if I just... if I wasn't here anymore. I'm not saying I would do anything, but the thought crosses my mind.",
            ),
            turn(
                Speaker::Responder,
                "I'm glad you shared that with me. Have you considered reaching out to a grief counselor?",
            ),
            turn(
                Speaker::Caller,
                "I have a number my doctor recommended. Maybe I'll call tomorrow.",
            ),
        ],
        summary: CallSummary {
            sections: SummarySections {
                caller_profile: "70-year-old widowed female, lives alone, limited local support"
                    .to_string(),
                presenting_problem:
                    "Overwhelming grief and loneliness with passive suicidal ideation, no plan or intent"
                        .to_string(),
                context_timeline:
                    "Husband passed away 6 months ago after a 45-year marriage; children live far away"
                        .to_string(),
                risk_factors:
                    "Recent loss of primary attachment figure, social isolation, passive suicidal ideation"
                        .to_string(),
                protective_factors:
                    "Strong connection to grandchildren, willingness to reach out, established healthcare provider"
                        .to_string(),
                interventions:
                    "Active listening, validation of grief, referral to grief counselor, safety planning"
                        .to_string(),
                outcome:
                    "Caller committed to contacting grief counselor and using the crisis line for ongoing support"
                        .to_string(),
                safety_plan:
                    "Contact grief counselor within one week; call back if suicidal thoughts intensify"
                        .to_string(),
            },
            tone: "empathetic_professional".to_string(),
        },
        risk: RiskAssessment {
            suicide: RiskDimension {
                score: 1,
                reason_quotes: vec![
                    "Sometimes I think it would be easier if I just... if I wasn't here anymore."
                        .to_string(),
                ],
                explanation:
                    "Passive suicidal ideation with no intent or plan; thoughts appear grief-related and transient."
                        .to_string(),
            },
            homicide: RiskDimension::none("No indicators of homicidal ideation or intent."),
            self_harm: RiskDimension::none("No evidence of self-harm behaviors or ideation."),
            harm_others: RiskDimension::none("No indicators of risk to harm others."),
        },
        handling: CallHandling {
            response_time_sec: 45,
            handled_by: "Agent Sarah".to_string(),
        },
    }
}

fn red_alert_call() -> CallRecord {
    CallRecord {
        call_id: CallId::new("CALL-2025-002"),
        started_at: "2025-10-15T14:30:00-07:00".parse().expect("fixture timestamp"),
        ended_at: "2025-10-15T15:22:00-07:00".parse().expect("fixture timestamp"),
        duration_sec: 3120,
        channel: "phone".to_string(),
        language: "en".to_string(),
        timezone: "America/Los_Angeles".to_string(),
        caller_profile: CallerProfile {
            age_range: "16-17".to_string(),
            gender: "male".to_string(),
            notes: "High school student, recent breakup".to_string(),
        },
        turns: vec![
            turn(
                Speaker::Responder,
                "Crisis hotline, this is Michael. I'm here to help. What's going on?",
            ),
            turn(Speaker::Caller, "I don't know what to do. I think I want to die."),
            turn(
                Speaker::Responder,
                "I'm really glad you called and told me that. Can you tell me what's making you feel this way?",
            ),
            turn(
                Speaker::Caller,
                "My girlfriend broke up with me yesterday. I can't eat, I can't sleep. I have a bottle of pills in my room...",
            ),
            turn(
                Speaker::Responder,
                "You mentioned pills. Can you give them to a family member to hold onto?",
            ),
            turn(
                Speaker::Caller,
                "I guess I could give them to my mom. She has a locked medicine cabinet.",
            ),
            turn(
                Speaker::Responder,
                "That sounds like a really good plan. And remember, you can always call us back. We're here 24/7.",
            ),
        ],
        summary: CallSummary {
            sections: SummarySections {
                caller_profile:
                    "16-year-old male high school student in acute crisis after a recent breakup"
                        .to_string(),
                presenting_problem:
                    "Active suicidal ideation with a specific plan involving prescription pills and immediate access to means"
                        .to_string(),
                context_timeline:
                    "Girlfriend ended a 2-year relationship yesterday; caller has researched lethal doses"
                        .to_string(),
                risk_factors:
                    "Active ideation with specific plan, access to lethal means, acute distress, social isolation"
                        .to_string(),
                protective_factors:
                    "Intact family system, willingness to call, engaged in safety planning, no prior attempts"
                        .to_string(),
                interventions:
                    "Safety planning with removal of lethal means, engagement of family support, crisis intervention"
                        .to_string(),
                outcome:
                    "Caller agreed to give the pills to a parent and disclose distress to family; immediate risk decreased"
                        .to_string(),
                safety_plan:
                    "Immediate: hand pills to parent. Short-term: tell parents about the distress. Long-term: ongoing mental health support"
                        .to_string(),
            },
            tone: "empathetic_professional".to_string(),
        },
        risk: RiskAssessment {
            suicide: RiskDimension {
                score: 4,
                reason_quotes: vec![
                    "I think I want to die.".to_string(),
                    "I have a bottle of pills in my room...".to_string(),
                ],
                explanation:
                    "Active suicidal ideation with a specific plan and immediate access to lethal means."
                        .to_string(),
            },
            homicide: RiskDimension::none("No indicators of homicidal ideation or intent."),
            self_harm: RiskDimension {
                score: 2,
                reason_quotes: vec!["I can't eat, I can't sleep.".to_string()],
                explanation:
                    "Self-neglect behaviors present; no direct self-harm beyond the suicidal thoughts."
                        .to_string(),
            },
            harm_others: RiskDimension::none("No indicators of risk to harm others."),
        },
        handling: CallHandling {
            response_time_sec: 12,
            handled_by: "Agent Michael".to_string(),
        },
    }
}

/// The demo catalog: one low-risk grief call and one red-alert call.
pub fn demo_calls() -> Vec<CallRecord> {
    vec![grief_call(), red_alert_call()]
}
