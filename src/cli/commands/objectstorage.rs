use std::io::Write;

use tracing::instrument;

use super::{confirm, created_table, name_table};
use crate::cli::args::{AccessKeyCommands, ObjectStorageCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::{CreateAccessKeyParams, CreateBucketParams};
use crate::infrastructure::di::ServiceContainer;

#[instrument(skip_all)]
pub fn run(
    ctx: &ServiceContainer,
    command: ObjectStorageCommands,
    out: &mut dyn Write,
) -> CliResult<()> {
    let storage = ctx.client()?.object_storage();
    match command {
        ObjectStorageCommands::Create {
            name,
            dcslug,
            billing,
            size,
            price,
        } => {
            let params = CreateBucketParams {
                dcslug: dcslug.unwrap_or_default(),
                name: name.clone(),
                billing: billing.unwrap_or_default(),
                size: size.unwrap_or_default(),
                price: price.unwrap_or_default(),
            };
            let created = storage.create_bucket(&params)?;
            created_table(out, &["Bucket Name", "Bucket Id", "Status"], &name, &created)
        }
        ObjectStorageCommands::Get { dcslug, bucket } => {
            output::single(out, &storage.read_bucket(&dcslug, &bucket)?)
        }
        ObjectStorageCommands::List { dcslug } => output::list(out, &storage.list_buckets(&dcslug)?),
        ObjectStorageCommands::Delete { dcslug, bucket } => {
            confirm(ctx)?;
            let reply = storage.delete_bucket(&dcslug, &bucket)?;
            output::status_line(out, reply.status.as_str())
        }
        ObjectStorageCommands::Accesskey { command } => match command {
            AccessKeyCommands::Create { dcslug, name } => {
                let reply = storage.create_access_key(
                    &dcslug,
                    &CreateAccessKeyParams {
                        accesskey_name: name.clone(),
                    },
                )?;
                name_table(out, &["Accesskey Name", "Status"], &name, reply.status.as_str())
            }
            AccessKeyCommands::Get { dcslug, accesskey } => {
                output::single(out, &storage.read_access_key(&dcslug, &accesskey)?)
            }
            AccessKeyCommands::List { dcslug } => {
                output::list(out, &storage.list_access_keys(&dcslug)?)
            }
        },
    }
}
