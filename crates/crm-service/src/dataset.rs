use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use crm_core::{
    AccountTag, Activity, ActivityType, AgentState, AgentStatus, ChatMessage, Contact, Deal, Inbox,
    MessageAuthor, MirroredDeal, Stage, default_stages,
};

/// The authoritative mutable dataset owned by the mock service.
///
/// Constructed once and injected into `CrmService`; replaces the
/// module-global state a real backend would keep in its database.
#[derive(Debug, Clone, Default)]
pub struct CrmDataset {
    pub stage_definitions: Vec<Stage>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,

    // Mirror "spreadsheet" tables feeding the reports view
    pub mirror_marketing_return: Vec<MirroredDeal>,
    pub mirror_won: Vec<MirroredDeal>,
    pub mirror_lost: Vec<MirroredDeal>,

    pub activities: Vec<Activity>,
    pub agent_status: HashMap<String, AgentStatus>,
    pub chat_messages: HashMap<String, Vec<ChatMessage>>,
    pub account_tags: Vec<AccountTag>,
    pub inboxes: Vec<Inbox>,
}

impl CrmDataset {
    /// Empty dataset with only the fixed stage definitions.
    pub fn empty() -> Self {
        Self {
            stage_definitions: default_stages(),
            ..Self::default()
        }
    }

    /// Demo dataset matching the panel's original sample account.
    pub fn seeded() -> Self {
        let contacts = vec![
            contact(
                "1",
                "Ana Silva",
                "ana.silva@example.com",
                "+55 11 98765-4321",
                &["VIP", "Marketing"],
                "Ativo",
                true,
            ),
            contact(
                "2",
                "Bruno Costa",
                "bruno.costa@example.com",
                "+55 21 91234-5678",
                &["Lead"],
                "Novo",
                false,
            ),
            contact(
                "3",
                "Carla Dias",
                "carla.dias@example.com",
                "+55 31 95555-8888",
                &["Suporte"],
                "Em Atendimento",
                true,
            ),
        ];

        let deals = vec![
            deal(
                "d1",
                "1",
                "Ana Silva",
                "Consultoria de Marketing Digital",
                15000.0,
                "proposal",
                date(2024, 7, 28),
            ),
            deal(
                "d2",
                "2",
                "Bruno Costa",
                "Desenvolvimento de Website",
                8000.0,
                "qualified",
                date(2024, 7, 29),
            ),
            deal(
                "d3",
                "1",
                "Ana Silva",
                "Gestão de Redes Sociais",
                5000.0,
                "won",
                date(2024, 7, 15),
            ),
            deal(
                "d4",
                "3",
                "Carla Dias",
                "Plano de Suporte Premium",
                2500.0,
                "lead",
                date(2024, 7, 30),
            ),
        ];

        // Deals already in a mirrored stage are mirrored from the start
        let mirror_won = deals
            .iter()
            .filter(|d| d.stage == "won")
            .map(|d| MirroredDeal::of(d, d.last_contact.and_hms_opt(0, 0, 0).unwrap().and_utc()))
            .collect();

        let activities = vec![
            activity(
                "a1",
                "1",
                ActivityType::Meeting,
                "Reunião de alinhamento de proposta",
                date(2024, 8, 2),
                false,
            ),
            activity(
                "a2",
                "1",
                ActivityType::Call,
                "Ligar para follow-up",
                date(2024, 8, 5),
                false,
            ),
            activity(
                "a3",
                "2",
                ActivityType::Task,
                "Enviar e-mail de qualificação",
                date(2024, 7, 31),
                true,
            ),
            activity(
                "a4",
                "3",
                ActivityType::Note,
                "Cliente mencionou interesse em SEO",
                date(2024, 7, 30),
                true,
            ),
        ];

        let agent_status = HashMap::from([
            (
                "1".to_string(),
                AgentStatus {
                    state: AgentState::Active,
                    last_activity: datetime(2024, 7, 30, 10, 5, 12),
                    summary: "Analisou o histórico de compras e sugeriu um novo produto com base \
                              no interesse em marketing de conteúdo."
                        .to_string(),
                },
            ),
            (
                "2".to_string(),
                AgentStatus {
                    state: AgentState::Idle,
                    last_activity: datetime(2024, 7, 29, 15, 20, 1),
                    summary: "Aguardando resposta do cliente para agendar demonstração.".to_string(),
                },
            ),
            (
                "3".to_string(),
                AgentStatus {
                    state: AgentState::Processing,
                    last_activity: datetime(2024, 7, 30, 11, 0, 0),
                    summary: "Processando a solicitação de suporte técnico sobre a integração da \
                              API."
                        .to_string(),
                },
            ),
        ]);

        let chat_messages = HashMap::from([
            (
                "1".to_string(),
                vec![
                    message(
                        "m1",
                        MessageAuthor::Bot,
                        "Olá Ana, percebi que você se interessou por nossos serviços de SEO. \
                         Posso ajudar com mais informações?",
                        datetime(2024, 7, 30, 10, 5, 0),
                    ),
                    message(
                        "m2",
                        MessageAuthor::User,
                        "Sim, gostaria de saber mais sobre os pacotes.",
                        datetime(2024, 7, 30, 10, 5, 30),
                    ),
                ],
            ),
            (
                "2".to_string(),
                vec![
                    message(
                        "m3",
                        MessageAuthor::Bot,
                        "Bem-vindo, Bruno! Como posso ajudar você hoje?",
                        datetime(2024, 7, 29, 15, 19, 0),
                    ),
                    message(
                        "m4",
                        MessageAuthor::User,
                        "Queria um orçamento para um site novo.",
                        datetime(2024, 7, 29, 15, 19, 45),
                    ),
                ],
            ),
            (
                "3".to_string(),
                vec![
                    message(
                        "m5",
                        MessageAuthor::User,
                        "Estou com um problema na minha conta.",
                        datetime(2024, 7, 30, 10, 59, 30),
                    ),
                    message(
                        "m6",
                        MessageAuthor::Bot,
                        "Claro, Carla. Estou verificando seu histórico para entender melhor. \
                         Um momento.",
                        datetime(2024, 7, 30, 10, 59, 55),
                    ),
                ],
            ),
        ]);

        let account_tags = vec![
            AccountTag::new("VIP".to_string(), "#7c3aed".to_string()),
            AccountTag::new("Marketing".to_string(), "#db2777".to_string()),
            AccountTag::new("Lead".to_string(), "#2563eb".to_string()),
            AccountTag::new("Suporte".to_string(), "#f59e0b".to_string()),
            AccountTag::new("Interesse-SEO".to_string(), "#10b981".to_string()),
            AccountTag::new("Reclamacao".to_string(), "#ef4444".to_string()),
        ];

        let inboxes = vec![
            Inbox {
                id: 1,
                name: "WhatsApp".to_string(),
            },
            Inbox {
                id: 2,
                name: "Website Chat".to_string(),
            },
            Inbox {
                id: 3,
                name: "Instagram".to_string(),
            },
        ];

        Self {
            stage_definitions: default_stages(),
            contacts,
            deals,
            mirror_marketing_return: Vec::new(),
            mirror_won,
            mirror_lost: Vec::new(),
            activities,
            agent_status,
            chat_messages,
            account_tags,
            inboxes,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, min, sec).unwrap()
}

fn contact(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    tags: &[&str],
    status: &str,
    ai_assist: bool,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status: status.to_string(),
        avatar_url: format!(
            "https://picsum.photos/seed/{}/100/100",
            name.split_whitespace().next().unwrap_or(name).to_lowercase()
        ),
        ai_assist,
    }
}

fn deal(
    id: &str,
    contact_id: &str,
    contact_name: &str,
    title: &str,
    value: f64,
    stage: &str,
    last_contact: NaiveDate,
) -> Deal {
    Deal {
        id: id.to_string(),
        contact_id: contact_id.to_string(),
        contact_name: contact_name.to_string(),
        title: title.to_string(),
        value,
        stage: stage.to_string(),
        last_contact,
    }
}

fn activity(
    id: &str,
    contact_id: &str,
    activity_type: ActivityType,
    title: &str,
    due_date: NaiveDate,
    completed: bool,
) -> Activity {
    Activity {
        id: id.to_string(),
        contact_id: contact_id.to_string(),
        activity_type,
        title: title.to_string(),
        due_date,
        completed,
    }
}

fn message(id: &str, author: MessageAuthor, text: &str, timestamp: NaiveDateTime) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        author,
        message: text.to_string(),
        timestamp,
    }
}
