//! UpdateProductsHandler - Command handler for the product catalogue form.

use std::sync::Arc;

use crate::domain::foundation::GuildId;
use crate::domain::settings::{parse_product_lines, MemberPermissions, SettingsError, SettingsPatch};
use crate::ports::SettingsStore;

use super::{AuthorizeAdminHandler, AuthorizeAdminQuery};

/// Command to replace the catalogue from one-product-per-line text.
#[derive(Debug, Clone)]
pub struct UpdateProductsCommand {
    pub guild_id: GuildId,
    pub member: MemberPermissions,
    pub products_text: String,
}

pub struct UpdateProductsHandler {
    store: Arc<dyn SettingsStore>,
    authorize: AuthorizeAdminHandler,
}

impl UpdateProductsHandler {
    pub fn new(store: Arc<dyn SettingsStore>, authorize: AuthorizeAdminHandler) -> Self {
        Self { store, authorize }
    }

    /// Returns the stored catalogue.
    pub async fn handle(&self, cmd: UpdateProductsCommand) -> Result<Vec<String>, SettingsError> {
        self.authorize
            .handle(AuthorizeAdminQuery {
                guild_id: cmd.guild_id.clone(),
                member: cmd.member,
            })
            .await?;

        let products = parse_product_lines(&cmd.products_text)?;
        let patch = SettingsPatch::products(products.clone())?;

        self.store
            .update_settings(&cmd.guild_id, &patch)
            .await
            .map_err(|err| {
                tracing::error!(guild_id = %cmd.guild_id, error = %err, "Product update failed");
                SettingsError::from(err)
            })?;

        tracing::info!(guild_id = %cmd.guild_id, count = products.len(), "Product catalogue updated");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::settings::get_settings::tests::MockSettingsStore;
    use crate::application::handlers::settings::GetSettingsHandler;

    fn handler(store: Arc<MockSettingsStore>) -> UpdateProductsHandler {
        let authorize = AuthorizeAdminHandler::new(GetSettingsHandler::new(store.clone()));
        UpdateProductsHandler::new(store, authorize)
    }

    fn command(text: &str) -> UpdateProductsCommand {
        UpdateProductsCommand {
            guild_id: GuildId::new("guild-1").unwrap(),
            member: MemberPermissions {
                administrator: true,
                ..Default::default()
            },
            products_text: text.into(),
        }
    }

    #[tokio::test]
    async fn lines_are_trimmed_and_blank_lines_dropped() {
        let store = Arc::new(MockSettingsStore::new());
        let products = handler(store.clone())
            .handle(command("  Widget \n\n Gadget\n   \nGizmo"))
            .await
            .unwrap();

        assert_eq!(products, vec!["Widget", "Gadget", "Gizmo"]);
        assert_eq!(store.patches()[0].products.as_ref().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let store = Arc::new(MockSettingsStore::new());
        let err = handler(store.clone()).handle(command(" \n \n")).await.unwrap_err();

        assert!(matches!(err, SettingsError::ValidationFailed(_)));
        assert!(store.patches().is_empty());
    }

    #[tokio::test]
    async fn more_than_twenty_five_products_is_rejected() {
        let store = Arc::new(MockSettingsStore::new());
        let text: Vec<String> = (1..=26).map(|i| format!("Product {}", i)).collect();
        let err = handler(store.clone())
            .handle(command(&text.join("\n")))
            .await
            .unwrap_err();

        assert!(matches!(err, SettingsError::ValidationFailed(_)));
        assert!(store.patches().is_empty());
    }

    #[tokio::test]
    async fn exactly_twenty_five_products_is_accepted() {
        let store = Arc::new(MockSettingsStore::new());
        let text: Vec<String> = (1..=25).map(|i| format!("Product {}", i)).collect();
        let products = handler(store).handle(command(&text.join("\n"))).await.unwrap();
        assert_eq!(products.len(), 25);
    }
}
