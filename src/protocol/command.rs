//! Manager command arrays.
//!
//! Kernel, file, advance and update operations share one wire shape: the
//! `data_field` is a string array whose first element names the verb.
//!
//! | Module | Action | Verbs |
//! |--------|--------|-------|
//! | kernel | `K` | `load`, `unload`, `execute`, `cancel`, `list`, `open`, `close` |
//! | file | `F` | `create`, `open`, `close`, `delete`, `truncate`, `append`, `get_size`, `get_list` |
//! | advance | `A` | `set_session_name`, `get_session_name`, `send_data_to_session`, `send_data_to_all`, `get_session_list` |
//! | update | `B` | `set_parameter`, `start` |

// ============================================================================
// Imports
// ============================================================================

use crate::identifiers::{DeviceIndex, SessionNumber};

use super::ActionCode;

// ============================================================================
// Command Wrapper
// ============================================================================

/// A command-array request, grouped by server module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Kernel (server plug-in) commands.
    Kernel(KernelCommand),
    /// Server-side file commands.
    File(FileCommand),
    /// Session naming and messaging.
    Advance(AdvanceCommand),
    /// Firmware update commands.
    Update(UpdateCommand),
}

impl Command {
    /// Returns the action code carried by the packet.
    #[must_use]
    pub const fn action_code(&self) -> ActionCode {
        match self {
            Self::Kernel(_) => ActionCode::KernelOperation,
            Self::File(_) => ActionCode::FileOperation,
            Self::Advance(_) => ActionCode::AdvanceOperation,
            Self::Update(_) => ActionCode::IndependentBootloader,
        }
    }

    /// Returns the verb (first array element).
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Kernel(c) => c.verb(),
            Self::File(c) => c.verb(),
            Self::Advance(c) => c.verb(),
            Self::Update(c) => c.verb(),
        }
    }

    /// Renders the `data_field` array.
    #[must_use]
    pub fn to_data_field(&self) -> Vec<String> {
        let mut field = vec![self.verb().to_string()];
        match self {
            Self::Kernel(c) => c.append_args(&mut field),
            Self::File(c) => c.append_args(&mut field),
            Self::Advance(c) => c.append_args(&mut field),
            Self::Update(c) => c.append_args(&mut field),
        }
        field
    }
}

impl From<KernelCommand> for Command {
    fn from(value: KernelCommand) -> Self {
        Self::Kernel(value)
    }
}

impl From<FileCommand> for Command {
    fn from(value: FileCommand) -> Self {
        Self::File(value)
    }
}

impl From<AdvanceCommand> for Command {
    fn from(value: AdvanceCommand) -> Self {
        Self::Advance(value)
    }
}

impl From<UpdateCommand> for Command {
    fn from(value: UpdateCommand) -> Self {
        Self::Update(value)
    }
}

// ============================================================================
// Kernel Commands
// ============================================================================

/// Kernel module commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelCommand {
    /// Load a kernel by file name.
    Load {
        /// Kernel file name on the server.
        name: String,
    },
    /// Unload a kernel.
    Unload {
        /// Kernel file name.
        name: String,
    },
    /// Execute a kernel with arguments.
    Execute {
        /// Kernel file name.
        name: String,
        /// Extra arguments.
        args: Vec<String>,
    },
    /// Cancel a running kernel.
    Cancel {
        /// Kernel file name.
        name: String,
    },
    /// List loaded kernels.
    List,
    /// Open a kernel device handle.
    Open {
        /// Kernel file name.
        name: String,
    },
    /// Close a kernel device handle.
    Close {
        /// Kernel file name.
        name: String,
    },
}

impl KernelCommand {
    fn verb(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::Unload { .. } => "unload",
            Self::Execute { .. } => "execute",
            Self::Cancel { .. } => "cancel",
            Self::List => "list",
            Self::Open { .. } => "open",
            Self::Close { .. } => "close",
        }
    }

    fn append_args(&self, field: &mut Vec<String>) {
        match self {
            Self::Load { name }
            | Self::Unload { name }
            | Self::Cancel { name }
            | Self::Open { name }
            | Self::Close { name } => field.push(name.clone()),
            Self::Execute { name, args } => {
                field.push(name.clone());
                field.extend(args.iter().cloned());
            }
            Self::List => {}
        }
    }
}

// ============================================================================
// File Commands
// ============================================================================

/// Server-side file commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCommand {
    /// Create (or truncate-create) a file.
    Create {
        /// File name.
        name: String,
    },
    /// Open an existing file.
    Open {
        /// File name.
        name: String,
    },
    /// Close the open file.
    Close,
    /// Delete a file.
    Delete {
        /// File name.
        name: String,
    },
    /// Truncate the open file to zero length.
    Truncate,
    /// Append a hex chunk to the open file.
    Append {
        /// Hex-digit-pair payload.
        hex: String,
    },
    /// Query the size of the open file.
    GetSize,
    /// List files in a server directory.
    GetList {
        /// Directory filter.
        dir: String,
    },
}

impl FileCommand {
    fn verb(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Open { .. } => "open",
            Self::Close => "close",
            Self::Delete { .. } => "delete",
            Self::Truncate => "truncate",
            Self::Append { .. } => "append",
            Self::GetSize => "get_size",
            Self::GetList { .. } => "get_list",
        }
    }

    fn append_args(&self, field: &mut Vec<String>) {
        match self {
            Self::Create { name } | Self::Open { name } | Self::Delete { name } => {
                field.push(name.clone());
            }
            Self::Append { hex } => field.push(hex.clone()),
            Self::GetList { dir } => field.push(dir.clone()),
            Self::Close | Self::Truncate | Self::GetSize => {}
        }
    }
}

// ============================================================================
// Advance Commands
// ============================================================================

/// Session naming and messaging commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceCommand {
    /// Name the current session.
    SetSessionName {
        /// New name.
        name: String,
    },
    /// Read the current session name.
    GetSessionName,
    /// Send data to one session.
    SendDataToSession {
        /// Target session.
        session: SessionNumber,
        /// Payload strings.
        data: Vec<String>,
    },
    /// Broadcast data to every session.
    SendDataToAll {
        /// Payload strings.
        data: Vec<String>,
    },
    /// List sessions known to the server.
    GetSessionList,
}

impl AdvanceCommand {
    fn verb(&self) -> &'static str {
        match self {
            Self::SetSessionName { .. } => "set_session_name",
            Self::GetSessionName => "get_session_name",
            Self::SendDataToSession { .. } => "send_data_to_session",
            Self::SendDataToAll { .. } => "send_data_to_all",
            Self::GetSessionList => "get_session_list",
        }
    }

    fn append_args(&self, field: &mut Vec<String>) {
        match self {
            Self::SetSessionName { name } => field.push(name.clone()),
            Self::SendDataToSession { session, data } => {
                field.push(session.to_string());
                field.extend(data.iter().cloned());
            }
            Self::SendDataToAll { data } => field.extend(data.iter().cloned()),
            Self::GetSessionName | Self::GetSessionList => {}
        }
    }
}

// ============================================================================
// Update Commands
// ============================================================================

/// Firmware update commands, issued on a device channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCommand {
    /// Set one update parameter (e.g. `"fw_file"`, `"dev_path"`).
    SetParameter {
        /// Parameter key.
        key: String,
        /// Parameter value.
        value: String,
    },
    /// Start the update for the device.
    Start {
        /// Device the update targets.
        device_index: DeviceIndex,
    },
}

impl UpdateCommand {
    fn verb(&self) -> &'static str {
        match self {
            Self::SetParameter { .. } => "set_parameter",
            Self::Start { .. } => "start",
        }
    }

    fn append_args(&self, field: &mut Vec<String>) {
        match self {
            Self::SetParameter { key, value } => {
                field.push(key.clone());
                field.push(value.clone());
            }
            Self::Start { device_index } => field.push(device_index.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_execute_field() {
        let command = Command::from(KernelCommand::Execute {
            name: "ker.dll".into(),
            args: vec!["a".into(), "b".into()],
        });
        assert_eq!(command.action_code(), ActionCode::KernelOperation);
        assert_eq!(command.to_data_field(), ["execute", "ker.dll", "a", "b"]);
    }

    #[test]
    fn test_kernel_list_field() {
        let command = Command::from(KernelCommand::List);
        assert_eq!(command.to_data_field(), ["list"]);
    }

    #[test]
    fn test_file_commands() {
        assert_eq!(
            Command::from(FileCommand::Append { hex: "0a0b".into() }).to_data_field(),
            ["append", "0a0b"]
        );
        assert_eq!(
            Command::from(FileCommand::GetSize).to_data_field(),
            ["get_size"]
        );
        assert_eq!(
            Command::from(FileCommand::Close).action_code(),
            ActionCode::FileOperation
        );
    }

    #[test]
    fn test_advance_send_to_session() {
        let command = Command::from(AdvanceCommand::SendDataToSession {
            session: SessionNumber::new(9),
            data: vec!["hello".into()],
        });
        assert_eq!(command.action_code(), ActionCode::AdvanceOperation);
        assert_eq!(
            command.to_data_field(),
            ["send_data_to_session", "9", "hello"]
        );
    }

    #[test]
    fn test_update_commands() {
        let set = Command::from(UpdateCommand::SetParameter {
            key: "fw_file".into(),
            value: "lpu237.rom".into(),
        });
        assert_eq!(set.action_code(), ActionCode::IndependentBootloader);
        assert_eq!(set.to_data_field(), ["set_parameter", "fw_file", "lpu237.rom"]);

        let start = Command::from(UpdateCommand::Start {
            device_index: DeviceIndex::new(4),
        });
        assert_eq!(start.to_data_field(), ["start", "4"]);
    }
}
