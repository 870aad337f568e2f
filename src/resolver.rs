//! Query/mutation front end over the user directory.
//!
//! Each request is one JSON document naming an operation:
//!
//! ```text
//! {"operation": "createUser", "createUserData": {"email": "a@example.com", "age": 30}}
//! {"operation": "user", "userId": "..."}
//! {"operation": "users", "userIds": ["...", "..."]}
//! {"operation": "updateUser", "updateUserData": {"userId": "...", "isSubscribed": true}}
//! {"operation": "deleteUser", "deleteUserData": {"userId": "..."}}
//! ```
//!
//! Replies are `{"data": {"<operation>": ...}}` or
//! `{"error": {"kind": "...", "message": "..."}}`. Unknown keys, a blank
//! `userId` or an invalid `email` are answered with `BadRequest` before the
//! directory is reached.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, instrument, warn};

use crate::clients::UserClient;
use crate::domain::{
    CreateUserInput, DeleteUserInput, GetUserArgs, GetUsersArgs, UpdateUserInput, ValidationError,
};
use crate::user_actor::UserError;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase", deny_unknown_fields)]
pub enum Operation {
    CreateUser {
        #[serde(rename = "createUserData")]
        create_user_data: CreateUserInput,
    },
    User(GetUserArgs),
    Users(GetUsersArgs),
    UpdateUser {
        #[serde(rename = "updateUserData")]
        update_user_data: UpdateUserInput,
    },
    DeleteUser {
        #[serde(rename = "deleteUserData")]
        delete_user_data: DeleteUserInput,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateUser { .. } => "createUser",
            Operation::User(_) => "user",
            Operation::Users(_) => "users",
            Operation::UpdateUser { .. } => "updateUser",
            Operation::DeleteUser { .. } => "deleteUser",
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Operation::CreateUser { create_user_data } => create_user_data.validate(),
            Operation::User(args) => args.validate(),
            Operation::Users(_) => Ok(()),
            Operation::UpdateUser { update_user_data } => update_user_data.validate(),
            Operation::DeleteUser { delete_user_data } => delete_user_data.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyError {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Reply {
    Data(Map<String, Value>),
    Error(ReplyError),
}

impl Reply {
    fn error(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Reply::Error(ReplyError {
            kind: kind.into(),
            message: message.into(),
        })
    }

    fn from_result<T: Serialize>(operation: &str, result: Result<T, UserError>) -> Self {
        let value = match result {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Operation failed");
                return Reply::error(e.kind(), e.to_string());
            }
        };
        match serde_json::to_value(value) {
            Ok(value) => {
                let mut data = Map::new();
                data.insert(operation.to_string(), value);
                Reply::Data(data)
            }
            Err(e) => Reply::error("Internal", e.to_string()),
        }
    }
}

/// Maps named operations onto [`UserClient`] calls.
#[derive(Clone)]
pub struct Resolver {
    users: UserClient,
}

impl Resolver {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    #[instrument(skip_all, fields(operation = operation.name()))]
    pub async fn handle(&self, operation: Operation) -> Reply {
        let name = operation.name();
        if let Err(e) = operation.validate() {
            warn!(error = %e, "Rejected invalid request");
            return Reply::error("BadRequest", e.to_string());
        }
        match operation {
            Operation::CreateUser { create_user_data } => {
                Reply::from_result(name, self.users.create_user(create_user_data).await)
            }
            Operation::User(args) => Reply::from_result(name, self.users.find_user(args.user_id).await),
            Operation::Users(args) => {
                Reply::from_result(name, self.users.find_users(args.user_ids).await)
            }
            Operation::UpdateUser { update_user_data } => {
                Reply::from_result(name, self.users.update_user(update_user_data).await)
            }
            Operation::DeleteUser { delete_user_data } => {
                Reply::from_result(name, self.users.remove_user(delete_user_data.user_id).await)
            }
        }
    }

    /// Parses one JSON request document and handles it. Malformed documents
    /// never reach the directory.
    pub async fn handle_line(&self, line: &str) -> Reply {
        match serde_json::from_str::<Operation>(line) {
            Ok(operation) => self.handle(operation).await,
            Err(e) => {
                warn!(error = %e, "Rejected malformed request");
                Reply::error("BadRequest", e.to_string())
            }
        }
    }

    /// Answers one request per line until `input` ends. A line longer than
    /// `max_line_length` bytes is discarded and answered with `BadRequest`.
    pub async fn serve<R, W>(
        &self,
        input: R,
        mut output: W,
        max_line_length: usize,
    ) -> Result<(), ServeError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(input);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let limit = max_line_length as u64 + 1;
            if (&mut reader).take(limit).read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            } else if buf.len() > max_line_length {
                skip_line(&mut reader).await?;
                warn!(max_line_length, "Rejected oversized request");
                let reply = Reply::error("BadRequest", format!("request exceeds {max_line_length} bytes"));
                write_reply(&mut output, &reply).await?;
                continue;
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => Reply::error("BadRequest", e.to_string()),
            };
            write_reply(&mut output, &reply).await?;
        }
        debug!("Input closed");
        Ok(())
    }
}

/// Consumes input up to and including the next newline.
async fn skip_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

async fn write_reply<W: AsyncWrite + Unpin>(output: &mut W, reply: &Reply) -> Result<(), ServeError> {
    let mut out = serde_json::to_string(reply)?;
    out.push('\n');
    output.write_all(out.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
