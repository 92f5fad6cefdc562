//! Transaction gateway seam: run a program against a COMMAREA.
//!
//! The crate does not ship a transport. A [`Gateway`] flows one
//! [`EciRequest`] to a region and hands back the program's reply; the
//! [`Transaction`] wrapper builds requests from a [`GatewayConfig`], turns
//! non-normal replies into errors, and chains encode, call and decode.
//!
//! ```rust
//! use commarea::gateway::{EciRequest, EciResponse, GatewayError, Transaction};
//! use commarea::{CommArea, GatewayConfig, NumericPicture, RecordLayout};
//!
//! let layout = RecordLayout::builder("PING")
//!     .numeric("COUNT", NumericPicture::pic9(3))
//!     .build()
//!     .unwrap();
//! let config = GatewayConfig::new("tcp://host", 2006, "CICSA", "USER", "PASS");
//! let tx = Transaction::new(config, "PING", "PINGPGM");
//!
//! // Echo the buffer back, as a stand-in for the region.
//! let mut gateway =
//!     |req: EciRequest| -> Result<EciResponse, GatewayError> { Ok(EciResponse::normal(req.commarea)) };
//!
//! let mut record = layout.new_record();
//! record.set(0, 7i64);
//! let consumed = tx.run(&mut gateway, &CommArea::new(), &layout, &mut record).unwrap();
//! assert_eq!(consumed, 3);
//! ```

use thiserror::Error;
use tracing::{info, warn};

use crate::config::GatewayConfig;
use crate::engine::CommArea;
use crate::error::CommAreaError;
use crate::layout::RecordLayout;
use crate::record::Record;

/// Abend code the region raises for a failed sign-on.
pub const NOT_AUTHORIZED_ABEND: &str = "AEY7";

/// One synchronous program call.
#[derive(Clone, PartialEq, Eq)]
pub struct EciRequest {
    pub region: String,
    pub user: String,
    pub password: String,
    pub program: String,
    pub transaction: String,
    pub commarea: Vec<u8>,
}

impl std::fmt::Debug for EciRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EciRequest")
            .field("region", &self.region)
            .field("user", &self.user)
            .field("password", &"********")
            .field("program", &self.program)
            .field("transaction", &self.transaction)
            .field("commarea", &self.commarea.len())
            .finish()
    }
}

/// Outcome reported by the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EciStatus {
    Normal,
    SecurityError,
    TransactionAbend,
    Failed { code: i32, message: String },
}

/// Reply to an [`EciRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EciResponse {
    pub status: EciStatus,
    pub abend_code: Option<String>,
    /// COMMAREA as returned by the program.
    pub commarea: Vec<u8>,
}

impl EciResponse {
    /// Successful reply carrying `commarea`.
    pub fn normal(commarea: Vec<u8>) -> Self {
        Self {
            status: EciStatus::Normal,
            abend_code: None,
            commarea,
        }
    }

    /// Reply for a program that abended with `code`.
    pub fn abend(code: impl Into<String>) -> Self {
        Self {
            status: EciStatus::TransactionAbend,
            abend_code: Some(code.into()),
            commarea: Vec::new(),
        }
    }
}

/// Errors from a gateway call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Invalid username or password")]
    NotAuthorized,

    #[error("Transaction abended: {code}")]
    Abend { code: String },

    #[error("Gateway call failed: RC [{code}]: {message}")]
    Failed { code: i32, message: String },

    #[error("Gateway connection failed: {0}")]
    Connection(String),
}

/// Transport that flows a request to a region.
pub trait Gateway {
    fn flow(&mut self, request: EciRequest) -> Result<EciResponse, GatewayError>;
}

impl<F> Gateway for F
where
    F: FnMut(EciRequest) -> Result<EciResponse, GatewayError>,
{
    fn flow(&mut self, request: EciRequest) -> Result<EciResponse, GatewayError> {
        self(request)
    }
}

/// Errors from [`Transaction::run`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error(transparent)]
    Codec(#[from] CommAreaError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// A program and transaction in a configured region.
#[derive(Debug, Clone)]
pub struct Transaction {
    config: GatewayConfig,
    transaction: String,
    program: String,
}

impl Transaction {
    pub fn new(
        config: GatewayConfig,
        transaction: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            config,
            transaction: transaction.into(),
            program: program.into(),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn transaction(&self) -> &str {
        &self.transaction
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Flow `commarea` to the program and return the reply buffer.
    pub fn call(
        &self,
        gateway: &mut dyn Gateway,
        commarea: Vec<u8>,
    ) -> Result<Vec<u8>, GatewayError> {
        let request = EciRequest {
            region: self.config.region.clone(),
            user: self.config.user.clone(),
            password: self.config.password.clone(),
            program: self.program.clone(),
            transaction: self.transaction.clone(),
            commarea,
        };

        let response = gateway.flow(request).inspect_err(|e| {
            warn!(transaction = %self.transaction, program = %self.program, error = %e, "Gateway call failed");
        })?;

        let result = check_response(response);
        match &result {
            Ok(commarea) => info!(
                transaction = %self.transaction,
                program = %self.program,
                region = %self.config.region,
                bytes = commarea.len(),
                "Transaction completed"
            ),
            Err(e) => warn!(
                transaction = %self.transaction,
                program = %self.program,
                region = %self.config.region,
                error = %e,
                "Transaction failed"
            ),
        }
        result
    }

    /// Encode `record`, call the program, and decode the reply back into
    /// `record`. Returns the number of reply bytes consumed.
    pub fn run(
        &self,
        gateway: &mut dyn Gateway,
        codec: &CommArea<'_>,
        layout: &RecordLayout,
        record: &mut dyn Record,
    ) -> Result<usize, TransactionError> {
        let request = codec.encode(layout, record)?;
        let reply = self.call(gateway, request)?;
        Ok(codec.decode(layout, &reply, record)?)
    }
}

fn check_response(response: EciResponse) -> Result<Vec<u8>, GatewayError> {
    let not_authorized = response
        .abend_code
        .as_deref()
        .is_some_and(|code| code.eq_ignore_ascii_case(NOT_AUTHORIZED_ABEND));

    match response.status {
        EciStatus::Normal => Ok(response.commarea),
        EciStatus::SecurityError => Err(GatewayError::NotAuthorized),
        _ if not_authorized => Err(GatewayError::NotAuthorized),
        EciStatus::TransactionAbend => Err(GatewayError::Abend {
            code: response.abend_code.unwrap_or_default(),
        }),
        EciStatus::Failed { code, message } => Err(GatewayError::Failed { code, message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Reply = Result<EciResponse, GatewayError>;

    fn tx() -> Transaction {
        Transaction::new(
            GatewayConfig::new("tcp://host", 2006, "CICSA", "USER", "PASS"),
            "TRN1",
            "PROG1",
        )
    }

    #[test]
    fn test_call_builds_request_from_config() {
        let mut seen = None;
        let mut gateway = |req: EciRequest| -> Reply {
            seen = Some(req.clone());
            Ok(EciResponse::normal(vec![1, 2, 3]))
        };
        let reply = tx().call(&mut gateway, vec![9]).unwrap();
        assert_eq!(reply, vec![1, 2, 3]);

        let req = seen.unwrap();
        assert_eq!(req.region, "CICSA");
        assert_eq!(req.user, "USER");
        assert_eq!(req.password, "PASS");
        assert_eq!(req.program, "PROG1");
        assert_eq!(req.transaction, "TRN1");
        assert_eq!(req.commarea, vec![9]);
    }

    #[test]
    fn test_security_error() {
        let mut gateway = |_req: EciRequest| -> Reply {
            Ok(EciResponse {
                status: EciStatus::SecurityError,
                abend_code: None,
                commarea: Vec::new(),
            })
        };
        assert_eq!(
            tx().call(&mut gateway, Vec::new()).unwrap_err(),
            GatewayError::NotAuthorized
        );
    }

    #[test]
    fn test_aey7_abend_is_not_authorized() {
        let mut gateway = |_req: EciRequest| -> Reply { Ok(EciResponse::abend("aey7")) };
        assert_eq!(
            tx().call(&mut gateway, Vec::new()).unwrap_err(),
            GatewayError::NotAuthorized
        );
    }

    #[test]
    fn test_abend() {
        let mut gateway = |_req: EciRequest| -> Reply { Ok(EciResponse::abend("ASRA")) };
        assert_eq!(
            tx().call(&mut gateway, Vec::new()).unwrap_err(),
            GatewayError::Abend {
                code: "ASRA".to_string()
            }
        );
    }

    #[test]
    fn test_failed_status() {
        let mut gateway = |_req: EciRequest| -> Reply {
            Ok(EciResponse {
                status: EciStatus::Failed {
                    code: -3,
                    message: "ECI_ERR_NO_CICS".to_string(),
                },
                abend_code: None,
                commarea: Vec::new(),
            })
        };
        let err = tx().call(&mut gateway, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Gateway call failed: RC [-3]: ECI_ERR_NO_CICS");
    }

    #[test]
    fn test_transport_error_passes_through() {
        let mut gateway = |_req: EciRequest| -> Reply {
            Err(GatewayError::Connection("connection refused".to_string()))
        };
        assert!(matches!(
            tx().call(&mut gateway, Vec::new()),
            Err(GatewayError::Connection(_))
        ));
    }

    #[test]
    fn test_request_debug_hides_password() {
        let req = EciRequest {
            region: "R".to_string(),
            user: "U".to_string(),
            password: "hunter2".to_string(),
            program: "P".to_string(),
            transaction: "T".to_string(),
            commarea: vec![0; 10],
        };
        assert!(!format!("{req:?}").contains("hunter2"));
    }
}
