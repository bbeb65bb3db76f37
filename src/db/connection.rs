use crate::error::OptimizerError;
use mysql::{Conn, OptsBuilder};

/// Open a connection using the `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASS`/`DB_NAME` environment
/// variables, mirroring the original `frontend/utils/db.py`/`scripts/helpers.py` connection
/// shape. Callers are expected to have loaded a `.env` file (see `main`) before calling this.
pub fn connect() -> anyhow::Result<Conn> {
    let port: u16 = std::env::var("DB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3306);

    let opts = OptsBuilder::new()
        .ip_or_hostname(std::env::var("DB_HOST").ok())
        .tcp_port(port)
        .user(std::env::var("DB_USER").ok())
        .pass(std::env::var("DB_PASS").ok())
        .db_name(std::env::var("DB_NAME").ok());

    Conn::new(opts)
        .map_err(OptimizerError::DataUnavailable)
        .map_err(Into::into)
}
