//! Template folder API operations.

use notify_admin_core::cache::{
    service_template_pattern, service_templates_key, template_folders_key,
};
use notify_admin_core::folders::{FolderTreeBuilder, FolderView, Viewer};
use notify_admin_core::models::{
    CreateFolderRequest, MoveToFolderRequest, TemplateFolder, UpdateFolderRequest,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::{decode, NotifyClient};
use crate::cached::Invalidation;
use crate::error::Result;

#[derive(Deserialize)]
struct CreatedFolder {
    id: Uuid,
}

impl NotifyClient {
    /// All folders of a service as a flat list.
    pub async fn get_template_folders(&self, service_id: Uuid) -> Result<Vec<TemplateFolder>> {
        self.cached_get(
            &template_folders_key(service_id),
            self.ttls.long,
            &format!("/service/{}/template-folder", service_id),
            &[],
            Some("template_folders"),
        )
        .await
    }

    /// One folder, looked up in the cached folder list.
    pub async fn get_template_folder(
        &self,
        service_id: Uuid,
        folder_id: Uuid,
    ) -> Result<Option<TemplateFolder>> {
        let folders = self.get_template_folders(service_id).await?;
        Ok(folders.into_iter().find(|folder| folder.id == folder_id))
    }

    /// The folder tree of a service as `viewer` sees it, with templates.
    pub async fn get_folder_view(
        &self,
        service_id: Uuid,
        viewer: impl Into<Viewer>,
    ) -> Result<FolderView> {
        let folders = self.get_template_folders(service_id).await?;
        let templates = self.get_service_templates(service_id).await?;

        let view = FolderTreeBuilder::new(&folders, &templates).build(viewer);
        for folder_id in view.broken_cycles() {
            tracing::warn!(
                service_id = %service_id,
                folder_id = %folder_id,
                "Template folder hierarchy contains a cycle; folder shown at the top level"
            );
        }
        Ok(view)
    }

    /// Create a folder and return its ID.
    pub async fn create_template_folder(
        &self,
        service_id: Uuid,
        request: &CreateFolderRequest,
    ) -> Result<Uuid> {
        let body = self
            .post(
                &format!("/service/{}/template-folder", service_id),
                request,
                &[Invalidation::key(template_folders_key(service_id))],
            )
            .await?;
        let created: CreatedFolder = decode(body, Some("data"))?;
        tracing::debug!(
            service_id = %service_id,
            folder_id = %created.id,
            name = %request.name,
            "Template folder created"
        );
        Ok(created.id)
    }

    /// Rename a folder or change who can see it.
    pub async fn update_template_folder(
        &self,
        service_id: Uuid,
        folder_id: Uuid,
        request: &UpdateFolderRequest,
    ) -> Result<()> {
        self.post(
            &format!("/service/{}/template-folder/{}", service_id, folder_id),
            request,
            &[Invalidation::key(template_folders_key(service_id))],
        )
        .await?;
        tracing::debug!(service_id = %service_id, folder_id = %folder_id, "Template folder updated");
        Ok(())
    }

    /// Delete an empty folder.
    pub async fn delete_template_folder(&self, service_id: Uuid, folder_id: Uuid) -> Result<()> {
        self.delete(
            &format!("/service/{}/template-folder/{}", service_id, folder_id),
            Value::Null,
            &[Invalidation::key(template_folders_key(service_id))],
        )
        .await?;
        tracing::debug!(service_id = %service_id, folder_id = %folder_id, "Template folder deleted");
        Ok(())
    }

    /// Move templates and folders into `target` (`None` for the top level).
    ///
    /// An empty request is a no-op and sends nothing.
    pub async fn move_to_folder(
        &self,
        service_id: Uuid,
        target: Option<Uuid>,
        request: &MoveToFolderRequest,
    ) -> Result<()> {
        if request.is_empty() {
            return Ok(());
        }

        let path = match target {
            Some(folder_id) => format!(
                "/service/{}/template-folder/{}/contents",
                service_id, folder_id
            ),
            None => format!("/service/{}/template-folder/contents", service_id),
        };
        self.post(
            &path,
            request,
            &[
                Invalidation::key(template_folders_key(service_id)),
                Invalidation::key(service_templates_key(service_id)),
                Invalidation::pattern(service_template_pattern(service_id)),
            ],
        )
        .await?;
        tracing::debug!(
            service_id = %service_id,
            templates = request.templates.len(),
            folders = request.folders.len(),
            "Moved to folder"
        );
        Ok(())
    }
}
