//! Line queries.

use super::schedules::fetch_schedules;
use super::Repository;
use crate::domain::{Line, LineId, LineWithSchedules};
use sqlx::FromRow;
use std::collections::HashMap;

#[derive(Debug, FromRow)]
struct LineRow {
    id: LineId,
    codigo: String,
    nome: String,
}

impl Repository {
    /// List every line with its schedules, each schedule with its stop resolved.
    ///
    /// Lines come back in id order; each line's schedules keep schedule id order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_lines(&self) -> Result<Vec<LineWithSchedules>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, LineRow>(
            r#"
            SELECT id, codigo, nome
            FROM linhas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut by_line: HashMap<LineId, Vec<_>> = HashMap::new();
        for schedule in fetch_schedules(&mut conn).await? {
            by_line
                .entry(schedule.schedule.line_id)
                .or_default()
                .push(schedule);
        }

        Ok(rows
            .into_iter()
            .map(|row| LineWithSchedules {
                schedules: by_line.remove(&row.id).unwrap_or_default(),
                line: Line {
                    id: row.id,
                    code: row.codigo,
                    name: row.nome,
                },
            })
            .collect())
    }
}
