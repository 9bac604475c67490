use crate::Result as PanelResult;
use crate::notifications::Notifier;

use crm_core::{AccountTag, ContactBundle};
use crm_service::CrmService;
use log::warn;

/// State behind the contact detail panel: the loaded bundle plus the
/// tag editing flows.
pub struct ContactWorkspace {
    service: CrmService,
    notifier: Notifier,
    bundle: Option<ContactBundle>,
}

impl ContactWorkspace {
    pub fn new(service: CrmService, notifier: Notifier) -> Self {
        Self {
            service,
            notifier,
            bundle: None,
        }
    }

    pub async fn load(&mut self, contact_id: &str) -> PanelResult<&ContactBundle> {
        match self.service.fetch_contact_bundle(contact_id).await {
            Ok(bundle) => Ok(&*self.bundle.insert(bundle)),
            Err(source) => {
                warn!("Failed to load contact {contact_id}: {source}");
                self.notifier.error("Não foi possível carregar o contato.");
                Err(source.into())
            }
        }
    }

    pub fn bundle(&self) -> Option<&ContactBundle> {
        self.bundle.as_ref()
    }

    pub async fn account_tags(&self) -> PanelResult<Vec<AccountTag>> {
        Ok(self.service.fetch_account_tags().await?)
    }

    /// Toggle a tag on the loaded contact, optimistically: the local list
    /// flips first, and is put back if the write is rejected.
    pub async fn toggle_tag(&mut self, tag_title: &str) -> PanelResult<()> {
        let Some(bundle) = self.bundle.as_mut() else {
            return Ok(());
        };

        let previous = bundle.contact.tags.clone();
        if let Some(position) = bundle.contact.tags.iter().position(|t| t == tag_title) {
            bundle.contact.tags.remove(position);
        } else {
            bundle.contact.tags.push(tag_title.to_string());
        }

        let contact_id = bundle.contact.id.clone();
        let new_tags = bundle.contact.tags.clone();

        match self.service.update_contact_tags(&contact_id, new_tags).await {
            Ok(contact) => {
                if let Some(bundle) = self.bundle.as_mut() {
                    bundle.contact = contact;
                }
                Ok(())
            }
            Err(source) => {
                warn!("Tag update failed for contact {contact_id}: {source}");
                if let Some(bundle) = self.bundle.as_mut() {
                    bundle.contact.tags = previous;
                }
                self.notifier.error("Erro ao atualizar as tags.");
                Err(source.into())
            }
        }
    }

    /// Create an account tag from the tag picker's search box.
    pub async fn create_tag(&self, tag: AccountTag) -> PanelResult<AccountTag> {
        match self.service.create_account_tag(tag).await {
            Ok(tag) => Ok(tag),
            Err(source) => {
                warn!("Tag creation failed: {source}");
                self.notifier.error("Erro ao criar a tag.");
                Err(source.into())
            }
        }
    }

    /// Rename or recolor an account tag; the loaded contact's list is
    /// refreshed from the service's cascade.
    pub async fn update_tag(&mut self, old_title: &str, updated: AccountTag) -> PanelResult<()> {
        let new_title = updated.title.clone();

        match self.service.update_account_tag(old_title, updated).await {
            Ok(_) => {
                if let Some(bundle) = self.bundle.as_mut() {
                    for tag in &mut bundle.contact.tags {
                        if tag == old_title {
                            *tag = new_title.clone();
                        }
                    }
                }
                Ok(())
            }
            Err(source) => {
                warn!("Tag update failed for {old_title}: {source}");
                self.notifier.error("Erro ao atualizar a tag.");
                Err(source.into())
            }
        }
    }

    /// Delete an account tag everywhere, including the loaded contact.
    pub async fn delete_tag(&mut self, title: &str) -> PanelResult<()> {
        match self.service.delete_account_tag(title).await {
            Ok(()) => {
                if let Some(bundle) = self.bundle.as_mut() {
                    bundle.contact.tags.retain(|t| t != title);
                }
                Ok(())
            }
            Err(source) => {
                warn!("Tag deletion failed for {title}: {source}");
                self.notifier.error("Erro ao excluir a tag.");
                Err(source.into())
            }
        }
    }
}
