//! Walk a user through its full lifecycle against a running IAM API server.
//!
//! Reads the iamconfig at `$HOME/.iam/config` (or the path given as the
//! first argument) and creates, lists, updates, and deletes a user named
//! `sdk`.

use anyhow::Context;
use iam_client::meta::{
    CreateOptions, DeleteOptions, GetOptions, ListOptions, ObjectMeta, UpdateOptions,
};
use iam_client::{Clientset, User};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let iamconfig = std::env::args().nth(1).map_or_else(
        || {
            iam_clientcmd::recommended_home_file()
                .context("no home directory; pass an iamconfig path")
        },
        |path| Ok(path.into()),
    )?;

    let config = iam_clientcmd::build_config_from_flags("", &iamconfig)?;
    let clients = Clientset::for_config(&config)?;
    let api = clients.iam().api_v1();

    let user = User {
        meta: ObjectMeta::named("sdk"),
        nickname: "sdkexample".to_string(),
        password: "Sdk@2020".to_string(),
        email: "user@example.com".to_string(),
        phone: "1812884xxxx".to_string(),
        ..Default::default()
    };

    let created = api.users().create(&user, &CreateOptions::default()).await?;
    info!(name = %created.meta.name, "created user");

    let fetched = api.users().get("sdk", &GetOptions::default()).await?;
    info!(nickname = %fetched.nickname, "fetched user");

    let mut updated = fetched;
    updated.nickname = "sdkexample_update".to_string();
    let updated = api
        .users()
        .update(&updated, &UpdateOptions::default())
        .await?;
    info!(nickname = %updated.nickname, "updated user");

    let list = api.users().list(&ListOptions::default()).await?;
    info!(total = list.meta.total_count, "listed users");

    api.users()
        .delete("sdk", &DeleteOptions { unscoped: true })
        .await?;
    info!("deleted user");

    Ok(())
}
