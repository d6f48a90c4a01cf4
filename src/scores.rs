//! Retrieve show score totals from the stats database.

use color_eyre::Result;
use mysql::prelude::Queryable as _;

/// Sum every panelist's score per show, skipping "best of" shows and repeat broadcasts, and keep
/// only the shows that scored at all. Retrieval order is whatever the server returns.
const TOTALS_QUERY: &str = "SELECT CAST(SUM(pm.panelistscore) AS SIGNED) AS total \
     FROM ww_showpnlmap pm \
     JOIN ww_shows s ON s.showid = pm.showid \
     WHERE s.bestof = 0 AND s.repeatshowid IS NULL \
     GROUP BY s.showdate \
     HAVING SUM(pm.panelistscore) > 0";

/// `ScoreProvider`
pub struct ScoreProvider {
    /// An open connection to the database.
    connection: mysql::Conn,
}

impl ScoreProvider {
    /// Connect to the database described by the given settings.
    pub fn connect(database: &crate::settings::Database) -> Result<Self> {
        tracing::info!(
            "Connecting to database '{}' at {}:{}",
            database.database,
            database.host,
            database.port
        );
        let opts = mysql::OptsBuilder::new()
            .ip_or_hostname(Some(&database.host))
            .tcp_port(database.port)
            .user(Some(&database.user))
            .pass(Some(&database.password))
            .db_name(Some(&database.database));
        let connection = mysql::Conn::new(opts)?;

        Ok(Self { connection })
    }

    /// Fetch the total score of every qualifying show, in retrieval order.
    pub fn fetch_totals(&mut self) -> Result<Vec<u32>> {
        let raw_totals: Vec<i64> = self.connection.query(TOTALS_QUERY)?;
        tracing::info!("Retrieved {} show score totals", raw_totals.len());

        let mut totals = Vec::with_capacity(raw_totals.len());
        for total in raw_totals {
            totals.push(u32::try_from(total)?);
        }

        Ok(totals)
    }
}
