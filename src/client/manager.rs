//! Kernel, file and advance commands on the manager channel.
//!
//! Every operation sends one `["verb", ...args]` array and resolves from the
//! next manager reply whose first element is `"success"`.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::{DeviceIndex, SessionNumber};
use crate::protocol::{
    AdvanceCommand, Command, FileCommand, KernelCommand, Packet, validate_hex,
};
use crate::transport::pending::Pending;

use super::core::Client;

// ============================================================================
// Client - Kernel
// ============================================================================

impl Client {
    /// Loads a kernel (server plug-in) by file name.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if the server refuses
    pub async fn kernel_load(&self, name: &str) -> Result<()> {
        self.command(KernelCommand::Load { name: name.into() }).await?;
        Ok(())
    }

    /// Unloads a kernel.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_unload(&self, name: &str) -> Result<()> {
        self.command(KernelCommand::Unload { name: name.into() }).await?;
        Ok(())
    }

    /// Executes a kernel; resolves with the reply items after `"success"`.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_execute(&self, name: &str, args: Vec<String>) -> Result<Vec<String>> {
        self.command(KernelCommand::Execute {
            name: name.into(),
            args,
        })
        .await
    }

    /// Cancels a running kernel.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_cancel(&self, name: &str) -> Result<()> {
        self.command(KernelCommand::Cancel { name: name.into() }).await?;
        Ok(())
    }

    /// Lists loaded kernels.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_list(&self) -> Result<Vec<String>> {
        self.command(KernelCommand::List).await
    }

    /// Opens a kernel handle.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_open(&self, name: &str) -> Result<()> {
        self.command(KernelCommand::Open { name: name.into() }).await?;
        Ok(())
    }

    /// Closes a kernel handle.
    ///
    /// # Errors
    ///
    /// Same as [`kernel_load`](Self::kernel_load).
    pub async fn kernel_close(&self, name: &str) -> Result<()> {
        self.command(KernelCommand::Close { name: name.into() }).await?;
        Ok(())
    }
}

// ============================================================================
// Client - File
// ============================================================================

impl Client {
    /// Creates a server-side file.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if the server refuses
    pub async fn file_create(&self, name: &str) -> Result<()> {
        self.command(FileCommand::Create { name: name.into() }).await?;
        Ok(())
    }

    /// Opens a server-side file.
    ///
    /// # Errors
    ///
    /// Same as [`file_create`](Self::file_create).
    pub async fn file_open(&self, name: &str) -> Result<()> {
        self.command(FileCommand::Open { name: name.into() }).await?;
        Ok(())
    }

    /// Closes the open file.
    ///
    /// # Errors
    ///
    /// Same as [`file_create`](Self::file_create).
    pub async fn file_close(&self) -> Result<()> {
        self.command(FileCommand::Close).await?;
        Ok(())
    }

    /// Deletes a server-side file.
    ///
    /// # Errors
    ///
    /// Same as [`file_create`](Self::file_create).
    pub async fn file_delete(&self, name: &str) -> Result<()> {
        self.command(FileCommand::Delete { name: name.into() }).await?;
        Ok(())
    }

    /// Truncates the open file.
    ///
    /// # Errors
    ///
    /// Same as [`file_create`](Self::file_create).
    pub async fn file_truncate(&self) -> Result<()> {
        self.command(FileCommand::Truncate).await?;
        Ok(())
    }

    /// Appends a hex chunk to the open file.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `hex` is not a hex string
    /// - otherwise same as [`file_create`](Self::file_create)
    pub async fn file_append(&self, hex: &str) -> Result<()> {
        validate_hex(hex)?;
        self.command(FileCommand::Append { hex: hex.into() }).await?;
        Ok(())
    }

    /// Returns the size of the open file in bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDataField`] if the reply carries no number
    /// - otherwise same as [`file_create`](Self::file_create)
    pub async fn file_get_size(&self) -> Result<u64> {
        let items = self.command(FileCommand::GetSize).await?;
        items
            .first()
            .and_then(|size| size.parse::<u64>().ok())
            .ok_or_else(|| Error::invalid_data_field(format!("bad file size: {items:?}")))
    }

    /// Lists files in a server directory.
    ///
    /// # Errors
    ///
    /// Same as [`file_create`](Self::file_create).
    pub async fn file_get_list(&self, dir: &str) -> Result<Vec<String>> {
        self.command(FileCommand::GetList { dir: dir.into() }).await
    }
}

// ============================================================================
// Client - Advance
// ============================================================================

impl Client {
    /// Names the current session.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if no session
    /// - [`Error::ServerRejected`] if the server refuses
    pub async fn advance_set_session_name(&self, name: &str) -> Result<()> {
        self.command(AdvanceCommand::SetSessionName { name: name.into() })
            .await?;
        Ok(())
    }

    /// Returns the name of the current session.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDataField`] if the reply carries no name
    /// - otherwise same as [`advance_set_session_name`](Self::advance_set_session_name)
    pub async fn advance_get_session_name(&self) -> Result<String> {
        self.command(AdvanceCommand::GetSessionName)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_data_field("missing session name"))
    }

    /// Sends data to one session.
    ///
    /// # Errors
    ///
    /// Same as [`advance_set_session_name`](Self::advance_set_session_name).
    pub async fn advance_send_data_to_session(
        &self,
        session: SessionNumber,
        data: Vec<String>,
    ) -> Result<()> {
        self.command(AdvanceCommand::SendDataToSession { session, data })
            .await?;
        Ok(())
    }

    /// Broadcasts data to every session.
    ///
    /// # Errors
    ///
    /// Same as [`advance_set_session_name`](Self::advance_set_session_name).
    pub async fn advance_send_data_to_all(&self, data: Vec<String>) -> Result<()> {
        self.command(AdvanceCommand::SendDataToAll { data }).await?;
        Ok(())
    }

    /// Lists sessions known to the server.
    ///
    /// # Errors
    ///
    /// Same as [`advance_set_session_name`](Self::advance_set_session_name).
    pub async fn advance_get_session_list(&self) -> Result<Vec<String>> {
        self.command(AdvanceCommand::GetSessionList).await
    }
}

// ============================================================================
// Client - Internal
// ============================================================================

impl Client {
    /// Sends a manager-channel command array.
    async fn command(&self, command: impl Into<Command>) -> Result<Vec<String>> {
        self.command_on(DeviceIndex::MANAGER, command.into()).await
    }

    /// Sends a command array on `channel`; returns the items after `"success"`.
    pub(crate) async fn command_on(
        &self,
        channel: DeviceIndex,
        command: Command,
    ) -> Result<Vec<String>> {
        let session = self.session()?;
        let action = command.action_code();
        let packet = if channel.is_manager() {
            Packet::manager(session, action)
        } else {
            Packet::device(session, channel, action)
        }
        .with_strings(command.to_data_field());

        debug!(%channel, verb = command.verb(), "Command");
        self.request(packet, |responder| Pending::Command { action, responder })
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::client::ClientOptions;

    #[tokio::test]
    async fn test_commands_require_session() {
        let client = Client::new(ClientOptions::default());
        assert!(matches!(client.kernel_list().await, Err(Error::NotConnected)));
        assert!(matches!(client.file_get_size().await, Err(Error::NotConnected)));
        assert!(matches!(
            client.advance_get_session_name().await,
            Err(Error::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_file_append_validates_hex() {
        let client = Client::new(ClientOptions::default());
        assert!(matches!(
            client.file_append("abc").await,
            Err(Error::InvalidArgument { .. })
        ));
    }
}
