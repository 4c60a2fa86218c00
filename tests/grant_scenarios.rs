use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use lakegrant::acl::{Identity, IdentityKind};
use lakegrant::orchestrate::{grant, SessionContext};
use lakegrant::propagate::propagate;
use lakegrant::provider::memory::{MemoryProvider, RecordingSetter};

fn user() -> Identity {
    Identity::new(
        Uuid::parse_str("1f9a5c8e-2b77-4f3e-9c41-6a85d0be12aa").unwrap(),
        IdentityKind::User,
    )
}

#[test]
fn propagation_over_a_small_system_tree_emits_the_expected_entries() {
    // /system = { fileA, dirB = { fileC } }
    let mut provider = MemoryProvider::new();
    provider.insert_dir(
        "/system",
        vec![MemoryProvider::file("fileA"), MemoryProvider::dir("dirB")],
    );
    provider.insert_dir("/system/dirB", vec![MemoryProvider::file("fileC")]);

    let setter = RecordingSetter::new();
    let stats = propagate(&provider, &setter, "/system", user()).unwrap();
    assert_eq!(stats.files, 2);
    assert_eq!(stats.directories, 1);

    let id = "1f9a5c8e-2b77-4f3e-9c41-6a85d0be12aa";
    assert_eq!(
        setter.applied(),
        vec![
            // fileA: full entry scoped to the directory being listed
            ("/system".to_string(), format!("user:{}:rwx", id)),
            // dirB: inheritable + explicit halves, before any entry inside dirB
            ("/system".to_string(), format!("default:user:{}:rwx,user:{}:rwx", id, id)),
            // fileC: scoped to its parent, proving the walk descended
            ("/system/dirB".to_string(), format!("user:{}:rwx", id)),
        ]
    );
}

#[test]
fn default_mode_grant_completes_end_to_end() {
    let mut provider = MemoryProvider::new();
    provider.insert_dir("/", vec![MemoryProvider::dir("system")]);
    provider.insert_dir("/system", vec![MemoryProvider::dir("jobservice")]);
    provider.insert_dir("/system/jobservice", vec![MemoryProvider::dir("jobs")]);
    provider.insert_dir("/system/jobservice/jobs", vec![MemoryProvider::dir("Usql")]);
    provider.insert_dir("/system/jobservice/jobs/Usql", vec![MemoryProvider::dir("2023")]);
    provider.insert_dir("/system/jobservice/jobs/Usql/2023", vec![MemoryProvider::dir("11")]);
    provider.insert_dir("/system/jobservice/jobs/Usql/2023/11", vec![MemoryProvider::dir("30")]);
    provider.insert_dir("/system/jobservice/jobs/Usql/2023/11/30", vec![MemoryProvider::dir("22")]);
    provider.insert_dir("/system/jobservice/jobs/Usql/2023/11/30/22", vec![MemoryProvider::dir("45")]);
    provider.insert_dir("/system/jobservice/jobs/Usql/2023/11/30/22/45", vec![]);

    let provider = Arc::new(provider);
    let setter = Arc::new(RecordingSetter::new());
    let now = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();

    let outcome = grant(
        Arc::clone(&provider),
        Arc::clone(&setter),
        SessionContext::new("adl-prod-01"),
        user(),
        now,
    )
    .unwrap();

    let propagation_id = outcome.propagation.id();
    assert!(propagation_id > 0);
    for handle in outcome.path_tasks {
        handle.wait().unwrap();
    }
    outcome.propagation.wait().unwrap();

    let paths: Vec<String> = setter.applied().into_iter().map(|(p, _)| p).collect();
    assert!(paths.contains(&"/".to_string()));
    assert!(paths.contains(&"/system/jobservice/jobs/Usql".to_string()));
    assert!(paths.contains(&"/system/jobservice/jobs/Usql/2023/11/30/22/45".to_string()));
}
