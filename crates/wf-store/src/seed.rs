//! Demo dataset
//!
//! Five accounts (one admin, one HR manager, three field workers), a worker
//! profile for each field worker, three jobs in different states and a few
//! feed entries. Timestamps are relative to `now`.

use chrono::{DateTime, Duration, Utc};
use wf_core::WfResult;
use wf_models::{
    ActivitySubject, ActivityType, GeoPoint, JobLocation, JobPatch, JobPriority, JobStatus,
    NewActivity, NewJob, NewWorker, Role, Trade, WorkerStatus,
};

use crate::store::Tables;
use crate::users::CreateUserDto;

struct SeedUser {
    username: &'static str,
    password: &'static str,
    role: Role,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
}

const USERS: [SeedUser; 5] = [
    SeedUser {
        username: "admin",
        password: "admin123",
        role: Role::Admin,
        name: "Admin User",
        email: "admin@company.com",
        phone: "(555) 000-0001",
    },
    SeedUser {
        username: "hr.manager",
        password: "hr123",
        role: Role::Hr,
        name: "HR Manager",
        email: "hr@company.com",
        phone: "(555) 000-0002",
    },
    SeedUser {
        username: "john.doe",
        password: "worker123",
        role: Role::Worker,
        name: "John Doe",
        email: "john@company.com",
        phone: "(555) 000-0003",
    },
    SeedUser {
        username: "mike.smith",
        password: "worker123",
        role: Role::Worker,
        name: "Mike Smith",
        email: "mike@company.com",
        phone: "(555) 000-0004",
    },
    SeedUser {
        username: "sarah.wilson",
        password: "worker123",
        role: Role::Worker,
        name: "Sarah Wilson",
        email: "sarah@company.com",
        phone: "(555) 000-0005",
    },
];

/// Stored credentials for the demo accounts, in account order
#[derive(Debug, Clone)]
pub struct DemoCredentials(Vec<String>);

impl DemoCredentials {
    /// Run `hash` over every demo password. Argon2 is slow, so this happens
    /// before any store lock is taken.
    pub fn hash<H>(hash: H) -> WfResult<Self>
    where
        H: Fn(&str) -> WfResult<String>,
    {
        USERS
            .iter()
            .map(|seed| hash(seed.password))
            .collect::<WfResult<Vec<_>>>()
            .map(Self)
    }
}

/// Load the demo dataset into `tables`
pub fn seed_demo_data(tables: &mut Tables, now: DateTime<Utc>, credentials: &DemoCredentials) {
    let mut user_ids = Vec::with_capacity(USERS.len());
    for (seed, password_hash) in USERS.iter().zip(&credentials.0) {
        let user = tables.create_user(
            CreateUserDto {
                username: seed.username.to_string(),
                password_hash: password_hash.clone(),
                role: seed.role,
                name: seed.name.to_string(),
                email: Some(seed.email.to_string()),
                phone: Some(seed.phone.to_string()),
            },
            now,
        );
        user_ids.push(user.id);
    }
    let (hr, john, mike) = (user_ids[1], user_ids[2], user_ids[3]);

    let workers = [
        (john, Trade::Plumbing, WorkerStatus::Available, (40.7128, -74.0060), 24, "4.85"),
        (mike, Trade::Electrical, WorkerStatus::Working, (40.7589, -73.9851), 31, "4.92"),
        (user_ids[4], Trade::Hvac, WorkerStatus::Available, (40.7505, -73.9934), 18, "4.67"),
    ];
    let mut worker_ids = Vec::with_capacity(workers.len());
    for (user_id, specialty, status, (lat, lng), completed_jobs, rating) in workers {
        let worker = tables.create_worker(NewWorker {
            user_id,
            specialty,
            status,
            location: Some(GeoPoint::new(lat, lng)),
            completed_jobs,
            rating: rating.to_string(),
            is_active: true,
        });
        worker_ids.push(worker.id);
    }

    let pipe_repair = tables.create_job(
        NewJob {
            title: "Emergency Pipe Repair".into(),
            description: Some(
                "Kitchen sink is leaking, customer reports water damage. Need immediate attention."
                    .into(),
            ),
            job_type: Trade::Plumbing,
            priority: JobPriority::Urgent,
            status: JobStatus::Assigned,
            location: JobLocation::new("123 Main St, Downtown", 40.7128, -74.0060),
            assigned_to: Some(worker_ids[0]),
            customer_name: Some("Mrs. Johnson".into()),
            customer_phone: Some("(555) 123-4567".into()),
            estimated_duration: Some(2),
            scheduled_at: Some(now + Duration::hours(2)),
        },
        hr,
        now - Duration::hours(2),
    );

    let panel_upgrade = tables.create_job(
        NewJob {
            title: "Electrical Panel Upgrade".into(),
            description: Some("Replace old electrical panel with modern circuit breakers.".into()),
            job_type: Trade::Electrical,
            priority: JobPriority::Normal,
            status: JobStatus::InProgress,
            location: JobLocation::new("456 Oak Ave, Uptown", 40.7589, -73.9851),
            assigned_to: Some(worker_ids[1]),
            customer_name: Some("Mr. Williams".into()),
            customer_phone: Some("(555) 234-5678".into()),
            estimated_duration: Some(4),
            scheduled_at: None,
        },
        hr,
        now - Duration::hours(4),
    );
    tables.update_job(
        panel_upgrade.id,
        JobPatch {
            started_at: Some(Some(now - Duration::hours(1))),
            ..Default::default()
        },
    );

    tables.create_job(
        NewJob {
            title: "HVAC System Maintenance".into(),
            description: Some("Regular maintenance check for office building HVAC system.".into()),
            job_type: Trade::Hvac,
            priority: JobPriority::Normal,
            status: JobStatus::Pending,
            location: JobLocation::new(
                "789 Business Blvd, Business District",
                40.7505,
                -73.9934,
            ),
            assigned_to: None,
            customer_name: Some("ABC Corporation".into()),
            customer_phone: Some("(555) 345-6789".into()),
            estimated_duration: Some(3),
            scheduled_at: Some(now + Duration::days(1)),
        },
        hr,
        now - Duration::minutes(30),
    );

    tables.create_activity(
        NewActivity::new(ActivityType::JobAssigned, hr, "HR Manager assigned job to John Doe")
            .about(ActivitySubject::Job(pipe_repair.id)),
        now - Duration::minutes(30),
    );
    tables.create_activity(
        NewActivity::new(
            ActivityType::JobStarted,
            mike,
            "Mike Smith started job: Electrical Panel Upgrade",
        )
        .about(ActivitySubject::Job(panel_upgrade.id)),
        now - Duration::minutes(45),
    );
    tables.create_activity(
        NewActivity::new(ActivityType::WorkerClockedIn, john, "John Doe clocked in")
            .about(ActivitySubject::Worker(worker_ids[0])),
        now - Duration::hours(3),
    );

    tracing::info!(
        users = tables.users.len(),
        workers = tables.workers.len(),
        jobs = tables.jobs.len(),
        "demo data loaded"
    );
}
