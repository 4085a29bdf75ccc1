//! Secret resource client.

use std::time::Duration;

use iam_rest::{RestClient, RestResult};

use crate::meta::{CreateOptions, DeleteOptions, GetOptions, ListOptions, UpdateOptions};
use crate::resources::{Secret, SecretList};

const RESOURCE: &str = "secrets";

/// Typed operations on Secret resources.
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    client: &'a RestClient,
}

impl<'a> Secrets<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Create a secret. The server generates the key material.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn create(&self, secret: &Secret, opts: &CreateOptions) -> RestResult<Secret> {
        self.client
            .post()
            .resource(RESOURCE)
            .versioned_params(opts)
            .body(secret)
            .send()
            .await?
            .decode()
    }

    /// Update a secret, addressed by the name in its metadata.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn update(&self, secret: &Secret, opts: &UpdateOptions) -> RestResult<Secret> {
        self.client
            .put()
            .resource(RESOURCE)
            .name(&secret.meta.name)
            .versioned_params(opts)
            .body(secret)
            .send()
            .await?
            .decode()
    }

    /// Delete the named secret.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such secret exists.
    pub async fn delete(&self, name: &str, opts: &DeleteOptions) -> RestResult<()> {
        self.client
            .delete()
            .resource(RESOURCE)
            .name(name)
            .body(opts)
            .send()
            .await?;

        Ok(())
    }

    /// Delete every secret matching the list options.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn delete_collection(
        &self,
        opts: &DeleteOptions,
        list_opts: &ListOptions,
    ) -> RestResult<()> {
        let mut request = self
            .client
            .delete()
            .resource(RESOURCE)
            .versioned_params(list_opts);

        if let Some(secs) = list_opts.timeout_seconds {
            request = request.timeout(Duration::from_secs(secs));
        }

        request.body(opts).send().await?;
        Ok(())
    }

    /// Fetch the named secret.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` if no such secret exists.
    pub async fn get(&self, name: &str, opts: &GetOptions) -> RestResult<Secret> {
        self.client
            .get()
            .resource(RESOURCE)
            .name(name)
            .versioned_params(opts)
            .send()
            .await?
            .decode()
    }

    /// List secrets matching the given selectors.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error from the server.
    pub async fn list(&self, opts: &ListOptions) -> RestResult<SecretList> {
        let mut request = self.client.get().resource(RESOURCE).versioned_params(opts);

        if let Some(secs) = opts.timeout_seconds {
            request = request.timeout(Duration::from_secs(secs));
        }

        request.send().await?.decode()
    }
}
