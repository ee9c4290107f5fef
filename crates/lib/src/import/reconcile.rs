//! Reference-data reconciliation: merge a batch's requested organizer names
//! against the remote catalog, creating only what is missing.

use crate::gateway::CatalogGateway;
use crate::types::{Category, Tag, Tool};
use crate::MealieError;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};

/// One reconcilable reference-data kind (tag, category or tool), dispatching
/// its list/create calls through the gateway.
#[async_trait]
pub trait Organizer: Sized + Send + 'static {
    /// Kind label used in logs.
    const KIND: &'static str;

    fn name(&self) -> &str;

    async fn list<G: CatalogGateway + ?Sized>(gateway: &G) -> Result<Vec<Self>, MealieError>;

    async fn create<G: CatalogGateway + ?Sized>(
        gateway: &G,
        name: &str,
    ) -> Result<Self, MealieError>;
}

#[async_trait]
impl Organizer for Tag {
    const KIND: &'static str = "tag";

    fn name(&self) -> &str {
        &self.name
    }

    async fn list<G: CatalogGateway + ?Sized>(gateway: &G) -> Result<Vec<Self>, MealieError> {
        Ok(gateway.get_tags().await?.items)
    }

    async fn create<G: CatalogGateway + ?Sized>(
        gateway: &G,
        name: &str,
    ) -> Result<Self, MealieError> {
        gateway.create_tag(name).await
    }
}

#[async_trait]
impl Organizer for Category {
    const KIND: &'static str = "category";

    fn name(&self) -> &str {
        &self.name
    }

    async fn list<G: CatalogGateway + ?Sized>(gateway: &G) -> Result<Vec<Self>, MealieError> {
        Ok(gateway.get_categories().await?.items)
    }

    async fn create<G: CatalogGateway + ?Sized>(
        gateway: &G,
        name: &str,
    ) -> Result<Self, MealieError> {
        gateway.create_category(name).await
    }
}

#[async_trait]
impl Organizer for Tool {
    const KIND: &'static str = "tool";

    fn name(&self) -> &str {
        &self.name
    }

    async fn list<G: CatalogGateway + ?Sized>(gateway: &G) -> Result<Vec<Self>, MealieError> {
        Ok(gateway.get_tools().await?.items)
    }

    async fn create<G: CatalogGateway + ?Sized>(
        gateway: &G,
        name: &str,
    ) -> Result<Self, MealieError> {
        gateway.create_tool(name).await
    }
}

/// Builds the name→entity map for one organizer kind.
///
/// Lists the remote catalog once (a failure here propagates and is
/// batch-fatal), then creates every requested name that is still missing, in
/// the order given. A create failure is logged and leaves that name absent
/// from the map; it never aborts reconciliation of the remaining names. No
/// name is created twice, `requested` is expected to be already distinct.
pub async fn reconcile<T: Organizer, G: CatalogGateway + ?Sized>(
    gateway: &G,
    requested: Vec<String>,
) -> Result<HashMap<String, T>, MealieError> {
    let existing = T::list(gateway).await?;

    let mut map = HashMap::new();
    for entity in existing {
        // Last write wins if the remote catalog itself holds duplicate names.
        map.insert(entity.name().to_string(), entity);
    }

    for name in requested {
        if map.contains_key(&name) {
            continue;
        }
        match T::create(gateway, &name).await {
            Ok(entity) => {
                info!("created new {}: {name}", T::KIND);
                map.insert(name, entity);
            }
            Err(err) => {
                error!("failed to create {} {name:?}: {err}", T::KIND);
            }
        }
    }

    Ok(map)
}
