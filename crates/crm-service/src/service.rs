use crate::dataset::CrmDataset;
use crate::fault::FaultInjector;
use crate::latency::LatencyProfile;
use crate::mirror::sync_deal_to_mirrors;
use crate::{Result as ServiceErrorResult, ServiceError};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use crm_core::{
    AccountTag, Contact, ContactBundle, DailyPerformance, DashboardMetrics, Deal, DuplicateCheck,
    Inbox, MirrorTotals, MirroredDeal, NewLeadReceipt, NewLeadRequest, ReportTotals, Stage,
    StageId,
};
use log::{debug, info, warn};
use tokio::sync::RwLock;

// The ticketing host is mocked; the dashboard tile shows a fixed figure.
const MOCK_OPEN_TICKETS: u32 = 12;

const WEEKLY_PERFORMANCE: [(&str, u32, u32); 7] = [
    ("Seg", 4, 1),
    ("Ter", 3, 2),
    ("Qua", 5, 1),
    ("Qui", 2, 3),
    ("Sex", 6, 2),
    ("Sáb", 1, 0),
    ("Dom", 2, 1),
];

/// In-memory stand-in for the CRM backend API.
///
/// Owns the authoritative dataset behind an async lock, simulates call
/// latency, and can reject writes through its [`FaultInjector`]. Cloning
/// shares the same dataset.
#[derive(Debug, Clone)]
pub struct CrmService {
    dataset: Arc<RwLock<CrmDataset>>,
    latency: LatencyProfile,
    fault: Arc<FaultInjector>,
}

impl CrmService {
    pub fn new(dataset: CrmDataset, latency: LatencyProfile, fault: FaultInjector) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
            latency,
            fault: Arc::new(fault),
        }
    }

    /// Seeded demo service without latency or fault injection.
    pub fn seeded() -> Self {
        Self::new(
            CrmDataset::seeded(),
            LatencyProfile::instant(),
            FaultInjector::disabled(),
        )
    }

    pub fn fault_injector(&self) -> &FaultInjector {
        &self.fault
    }

    // ---------------------------------------------------------------------- //
    // Pipeline

    /// Fixed stage seed list served at panel startup.
    pub async fn fetch_stage_definitions(&self) -> ServiceErrorResult<Vec<Stage>> {
        self.latency.pause_short().await;

        let dataset = self.dataset.read().await;
        Ok(dataset.stage_definitions.clone())
    }

    /// All deals partitioned by stage. Every seeded stage is keyed, empty
    /// or not; deals sitting in panel-local stages key their own partition.
    pub async fn fetch_deals_grouped_by_stage(
        &self,
    ) -> ServiceErrorResult<HashMap<StageId, Vec<Deal>>> {
        self.latency.pause().await;

        let dataset = self.dataset.read().await;

        let mut grouped: HashMap<StageId, Vec<Deal>> = HashMap::new();
        for deal in &dataset.deals {
            grouped.entry(deal.stage.clone()).or_default().push(deal.clone());
        }

        for stage in &dataset.stage_definitions {
            grouped.entry(stage.id.clone()).or_default();
        }

        Ok(grouped)
    }

    /// Reassign a deal to `new_stage` and run the mirror sync.
    ///
    /// The dataset is only touched when the write is accepted; a rejected
    /// write leaves every table untouched.
    pub async fn write_deal_stage(
        &self,
        deal_id: &str,
        new_stage: &str,
    ) -> ServiceErrorResult<()> {
        self.latency.pause_short().await;

        if self.fault.should_reject() {
            warn!("Stage write rejected for deal {deal_id}");
            return Err(ServiceError::rejected("write_deal_stage"));
        }

        let mut dataset = self.dataset.write().await;

        let deal = dataset
            .deals
            .iter_mut()
            .find(|d| d.id == deal_id)
            .ok_or_else(|| ServiceError::not_found("deal", deal_id))?;

        deal.stage = new_stage.to_string();
        deal.last_contact = Utc::now().date_naive();
        let deal = deal.clone();

        sync_deal_to_mirrors(&mut dataset, &deal);

        debug!("Deal {deal_id} written to stage {new_stage}");
        Ok(())
    }

    // ---------------------------------------------------------------------- //
    // Contacts

    /// Everything the contact detail panel needs for one contact.
    pub async fn fetch_contact_bundle(
        &self,
        contact_id: &str,
    ) -> ServiceErrorResult<ContactBundle> {
        self.latency.pause().await;

        let dataset = self.dataset.read().await;

        let contact = dataset
            .contacts
            .iter()
            .find(|c| c.id == contact_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("contact", contact_id))?;

        Ok(ContactBundle {
            deals: dataset
                .deals
                .iter()
                .filter(|d| d.contact_id == contact.id)
                .cloned()
                .collect(),
            activities: dataset
                .activities
                .iter()
                .filter(|a| a.contact_id == contact.id)
                .cloned()
                .collect(),
            agent_status: dataset.agent_status.get(&contact.id).cloned(),
            chat_messages: dataset
                .chat_messages
                .get(&contact.id)
                .cloned()
                .unwrap_or_default(),
            contact,
        })
    }

    /// Replace a contact's tag list, returning the updated contact.
    pub async fn update_contact_tags(
        &self,
        contact_id: &str,
        tags: Vec<String>,
    ) -> ServiceErrorResult<Contact> {
        self.latency.pause_short().await;

        let mut dataset = self.dataset.write().await;

        let contact = dataset
            .contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| ServiceError::not_found("contact", contact_id))?;

        contact.tags = tags;
        Ok(contact.clone())
    }

    // ---------------------------------------------------------------------- //
    // Account tags

    pub async fn fetch_account_tags(&self) -> ServiceErrorResult<Vec<AccountTag>> {
        self.latency.pause_short().await;

        let dataset = self.dataset.read().await;
        Ok(dataset.account_tags.clone())
    }

    /// Titles are unique account-wide, compared case-insensitively.
    pub async fn create_account_tag(&self, tag: AccountTag) -> ServiceErrorResult<AccountTag> {
        self.latency.pause_short().await;

        let mut dataset = self.dataset.write().await;

        let exists = dataset
            .account_tags
            .iter()
            .any(|t| t.title.eq_ignore_ascii_case(&tag.title));
        if exists {
            return Err(ServiceError::already_exists("tag", tag.title));
        }

        dataset.account_tags.push(tag.clone());
        Ok(tag)
    }

    /// Delete a tag and detach it from every contact. Unknown titles are
    /// a no-op, matching the backend's idempotent delete.
    pub async fn delete_account_tag(&self, title: &str) -> ServiceErrorResult<()> {
        self.latency.pause_short().await;

        let mut dataset = self.dataset.write().await;

        dataset.account_tags.retain(|t| t.title != title);
        for contact in &mut dataset.contacts {
            contact.tags.retain(|t| t != title);
        }

        Ok(())
    }

    /// Rename or recolor a tag, renaming it on every tagged contact.
    pub async fn update_account_tag(
        &self,
        old_title: &str,
        updated: AccountTag,
    ) -> ServiceErrorResult<AccountTag> {
        self.latency.pause_short().await;

        let mut dataset = self.dataset.write().await;

        let tag = dataset
            .account_tags
            .iter_mut()
            .find(|t| t.title == old_title)
            .ok_or_else(|| ServiceError::not_found("tag", old_title))?;

        *tag = updated.clone();

        if updated.title != old_title {
            for contact in &mut dataset.contacts {
                for tag_title in &mut contact.tags {
                    if tag_title == old_title {
                        *tag_title = updated.title.clone();
                    }
                }
            }
        }

        Ok(updated)
    }

    // ---------------------------------------------------------------------- //
    // Lead intake

    pub async fn fetch_inboxes(&self) -> ServiceErrorResult<Vec<Inbox>> {
        self.latency.pause_short().await;

        let dataset = self.dataset.read().await;
        Ok(dataset.inboxes.clone())
    }

    /// Probe for an existing contact by email (case-insensitive) or exact
    /// phone number before intake creates a duplicate.
    pub async fn check_duplicate_contact(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> ServiceErrorResult<DuplicateCheck> {
        self.latency.pause().await;

        let dataset = self.dataset.read().await;

        let email = email.filter(|e| !e.is_empty());
        let phone = phone.filter(|p| !p.is_empty());

        let existing = dataset.contacts.iter().find(|c| {
            email.is_some_and(|e| c.email.eq_ignore_ascii_case(e))
                || phone.is_some_and(|p| c.phone == p)
        });

        Ok(DuplicateCheck {
            is_duplicate: existing.is_some(),
            contact_id: existing.map(|c| c.id.clone()),
        })
    }

    /// Create the contact and its first deal (stage `lead`), simulating
    /// the ticketing-host references a real intake would return.
    pub async fn create_lead(
        &self,
        request: &NewLeadRequest,
    ) -> ServiceErrorResult<NewLeadReceipt> {
        self.latency.pause().await;

        if self.fault.should_reject() {
            warn!("Lead intake rejected for {}", request.full_name);
            return Err(ServiceError::rejected("create_lead"));
        }

        let mut dataset = self.dataset.write().await;

        let contact = Contact::new_lead(
            request.full_name.clone(),
            request.email.clone().unwrap_or_default(),
            request.phone.clone().unwrap_or_default(),
        );

        let deal = Deal::new(
            contact.id.clone(),
            contact.name.clone(),
            format!("Negócio para {}", contact.name),
            request.value.unwrap_or(0.0),
            Utc::now().date_naive(),
        );

        let receipt = NewLeadReceipt {
            contact_id: contact.id.clone(),
            deal_id: deal.id.clone(),
            ticket_contact_ref: rand::random_range(100..1100),
            conversation_id: request
                .start_conversation
                .then(|| rand::random_range(500..1500)),
        };

        info!(
            "Lead created: contact {} deal {} via inbox {}",
            receipt.contact_id, receipt.deal_id, request.inbox_id
        );

        dataset.contacts.push(contact);
        dataset.deals.push(deal);

        Ok(receipt)
    }

    // ---------------------------------------------------------------------- //
    // Reports & dashboard

    pub async fn fetch_report_totals(&self) -> ServiceErrorResult<ReportTotals> {
        self.latency.pause().await;

        let dataset = self.dataset.read().await;

        Ok(ReportTotals {
            marketing_return: totals(&dataset.mirror_marketing_return),
            won: totals(&dataset.mirror_won),
            lost: totals(&dataset.mirror_lost),
        })
    }

    /// Rows of one mirror table, for the report drill-down.
    pub async fn fetch_mirrored_deals(
        &self,
        stage_id: &str,
    ) -> ServiceErrorResult<Vec<MirroredDeal>> {
        self.latency.pause_short().await;

        let dataset = self.dataset.read().await;

        let table = match stage_id {
            "marketing" => &dataset.mirror_marketing_return,
            "won" => &dataset.mirror_won,
            "lost" => &dataset.mirror_lost,
            _ => return Err(ServiceError::not_found("mirror table", stage_id)),
        };

        Ok(table.clone())
    }

    pub async fn fetch_dashboard_metrics(&self) -> ServiceErrorResult<DashboardMetrics> {
        self.latency.pause().await;

        let dataset = self.dataset.read().await;

        let lead_count = dataset
            .contacts
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == "Lead"))
            .count();

        let active_deals = dataset
            .deals
            .iter()
            .filter(|d| d.stage != "won" && d.stage != "lost")
            .count();

        let won_deals = dataset.deals.iter().filter(|d| d.stage == "won").count();
        let conversion_rate = if dataset.deals.is_empty() {
            0
        } else {
            ((won_deals as f64 / dataset.deals.len() as f64) * 100.0).round() as u32
        };

        let weekly_performance = WEEKLY_PERFORMANCE
            .iter()
            .map(|(day, leads, deals)| DailyPerformance {
                day: day.to_string(),
                leads: *leads,
                deals: *deals,
            })
            .collect();

        Ok(DashboardMetrics {
            lead_count,
            active_deals,
            conversion_rate,
            open_tickets: MOCK_OPEN_TICKETS,
            weekly_performance,
        })
    }
}

fn totals(table: &[MirroredDeal]) -> MirrorTotals {
    MirrorTotals {
        count: table.len(),
        total_value: table.iter().map(|d| d.value).sum(),
    }
}
