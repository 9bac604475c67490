use crate::Result as PanelResult;
use crate::notifications::Notifier;

use crm_core::{Inbox, NewLeadReceipt, NewLeadRequest};
use crm_service::CrmService;
use log::{info, warn};

/// Outcome of submitting the intake form. Every branch has already been
/// surfaced to the user as a notification.
#[derive(Debug, Clone, PartialEq)]
pub enum LeadSubmission {
    Created(NewLeadReceipt),
    /// A contact with the same email or phone already exists.
    Duplicate { contact_id: Option<String> },
    /// The form was rejected before reaching the service.
    Invalid { message: String },
    /// The service rejected the intake.
    Failed,
}

/// Lead intake flow: validate, probe for duplicates, create.
pub struct LeadIntake {
    service: CrmService,
    notifier: Notifier,
}

impl LeadIntake {
    pub fn new(service: CrmService, notifier: Notifier) -> Self {
        Self { service, notifier }
    }

    /// Inboxes offered by the intake form's selector.
    pub async fn inboxes(&self) -> PanelResult<Vec<Inbox>> {
        Ok(self.service.fetch_inboxes().await?)
    }

    /// Form constraints: a name, an email or a phone, and an inbox.
    pub fn validate(request: &NewLeadRequest) -> Result<(), String> {
        let has_email = request.email.as_deref().is_some_and(|e| !e.trim().is_empty());
        let has_phone = request.phone.as_deref().is_some_and(|p| !p.trim().is_empty());

        if request.full_name.trim().is_empty() || (!has_email && !has_phone) {
            return Err("Preencha o nome e e-mail ou telefone.".to_string());
        }

        if request.inbox_id == 0 {
            return Err("Selecione uma caixa de entrada.".to_string());
        }

        Ok(())
    }

    pub async fn submit(&self, request: &NewLeadRequest) -> LeadSubmission {
        // 1. Local validation
        if let Err(message) = Self::validate(request) {
            self.notifier.error(message.clone());
            return LeadSubmission::Invalid { message };
        }

        // 2. Duplicate probe
        let check = match self
            .service
            .check_duplicate_contact(request.email.as_deref(), request.phone.as_deref())
            .await
        {
            Ok(check) => check,
            Err(source) => {
                warn!("Duplicate check failed: {source}");
                self.notifier.error("Ocorreu um erro ao criar o lead.");
                return LeadSubmission::Failed;
            }
        };

        if check.is_duplicate {
            self.notifier
                .error("Já existe um contato com este e-mail ou telefone.");
            return LeadSubmission::Duplicate {
                contact_id: check.contact_id,
            };
        }

        // 3. Create
        match self.service.create_lead(request).await {
            Ok(receipt) => {
                info!(
                    "Lead intake created contact {} and deal {}",
                    receipt.contact_id, receipt.deal_id
                );
                self.notifier.success("Lead criado com sucesso!");
                LeadSubmission::Created(receipt)
            }
            Err(source) => {
                warn!("Lead intake failed: {source}");
                self.notifier.error("Ocorreu um erro ao criar o lead.");
                LeadSubmission::Failed
            }
        }
    }
}
