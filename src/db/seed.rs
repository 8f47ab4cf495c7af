//! Demo data for a fresh database (Maceió - AL).
//!
//! Seeding runs once, before the server accepts traffic. It is skipped as soon
//! as any line exists, and everything is inserted in a single transaction so a
//! failure leaves the store empty rather than half-populated.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use sqlx::sqlite::SqlitePool;
use tracing::info;

struct SeedLine {
    code: &'static str,
    name: &'static str,
}

struct SeedStop {
    name: &'static str,
    neighborhood: &'static str,
    lat: f64,
    lng: f64,
    crowding: &'static str,
}

/// Indexes refer to `LINES` and `STOPS`; offsets are minutes from seeding time.
struct SeedSchedule {
    line: usize,
    stop: usize,
    departs_in: i64,
    arrives_in: i64,
    traffic: &'static str,
}

const LINES: &[SeedLine] = &[
    SeedLine {
        code: "201",
        name: "Benedito Bentes / Centro",
    },
    SeedLine {
        code: "223",
        name: "Ponta Verde / Trapiche",
    },
    SeedLine {
        code: "611",
        name: "UFAL / Centro",
    },
];

const STOPS: &[SeedStop] = &[
    SeedStop {
        name: "Terminal do Benedito Bentes",
        neighborhood: "Benedito Bentes",
        lat: -9.5563,
        lng: -35.7735,
        crowding: "alta",
    },
    SeedStop {
        name: "Praça Deodoro",
        neighborhood: "Centro",
        lat: -9.6658,
        lng: -35.7350,
        crowding: "media",
    },
    SeedStop {
        name: "Orla da Ponta Verde",
        neighborhood: "Ponta Verde",
        lat: -9.6632,
        lng: -35.7003,
        crowding: "baixa",
    },
    SeedStop {
        name: "Terminal Trapiche",
        neighborhood: "Trapiche da Barra",
        lat: -9.6745,
        lng: -35.7540,
        crowding: "media",
    },
];

const SCHEDULES: &[SeedSchedule] = &[
    SeedSchedule {
        line: 0,
        stop: 0,
        departs_in: 10,
        arrives_in: 45,
        traffic: "moderado",
    },
    SeedSchedule {
        line: 0,
        stop: 1,
        departs_in: 20,
        arrives_in: 55,
        traffic: "intenso",
    },
    SeedSchedule {
        line: 1,
        stop: 2,
        departs_in: 15,
        arrives_in: 50,
        traffic: "livre",
    },
    SeedSchedule {
        line: 1,
        stop: 3,
        departs_in: 30,
        arrives_in: 65,
        traffic: "moderado",
    },
    SeedSchedule {
        line: 2,
        stop: 1,
        departs_in: 12,
        arrives_in: 42,
        traffic: "moderado",
    },
];

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// At least one line already existed; nothing was written.
    AlreadySeeded,
    /// Demo rows were inserted and committed.
    Seeded {
        lines: usize,
        stops: usize,
        crowding: usize,
        schedules: usize,
    },
}

/// Seed the demo network, anchoring schedules to the current local time.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
    seed_demo_data_at(pool, Local::now().naive_local()).await
}

/// Seed the demo network with schedules offset from `now` (truncated to the minute).
pub async fn seed_demo_data_at(
    pool: &SqlitePool,
    now: NaiveDateTime,
) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (existing_lines,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM linhas")
        .fetch_one(&mut *tx)
        .await?;
    if existing_lines > 0 {
        info!("Lines already present, skipping demo seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let base = truncate_to_minute(now);

    let mut line_ids = Vec::with_capacity(LINES.len());
    for line in LINES {
        let result = sqlx::query("INSERT INTO linhas (codigo, nome) VALUES (?, ?)")
            .bind(line.code)
            .bind(line.name)
            .execute(&mut *tx)
            .await?;
        line_ids.push(result.last_insert_rowid());
    }

    let mut stop_ids = Vec::with_capacity(STOPS.len());
    for stop in STOPS {
        let result = sqlx::query("INSERT INTO paradas (nome, bairro, lat, lng) VALUES (?, ?, ?, ?)")
            .bind(stop.name)
            .bind(stop.neighborhood)
            .bind(stop.lat)
            .bind(stop.lng)
            .execute(&mut *tx)
            .await?;
        stop_ids.push(result.last_insert_rowid());
    }

    for (stop, stop_id) in STOPS.iter().zip(&stop_ids) {
        sqlx::query("INSERT INTO lotacoes (parada_id, nivel) VALUES (?, ?)")
            .bind(*stop_id)
            .bind(stop.crowding)
            .execute(&mut *tx)
            .await?;
    }

    for schedule in SCHEDULES {
        sqlx::query(
            r#"
            INSERT INTO horarios (linha_id, parada_id, saida, chegada, status_transito)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(line_ids[schedule.line])
        .bind(stop_ids[schedule.stop])
        .bind(base + Duration::minutes(schedule.departs_in))
        .bind(base + Duration::minutes(schedule.arrives_in))
        .bind(schedule.traffic)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let outcome = SeedOutcome::Seeded {
        lines: LINES.len(),
        stops: STOPS.len(),
        crowding: STOPS.len(),
        schedules: SCHEDULES.len(),
    };
    info!(
        lines = LINES.len(),
        stops = STOPS.len(),
        schedules = SCHEDULES.len(),
        anchor = %base,
        "Demo data seeded"
    );
    Ok(outcome)
}

fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}
