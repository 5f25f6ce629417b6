//! Integration tests for the catalog query surface.
//!
//! These tests exercise the full path a downstream consumer takes: build a
//! catalog the way a loader would, then resolve lookups, filtered lists,
//! set operations, relationship queries, and device-section queries.

use osidb_catalog::{CatalogEntity, Db, Device, Hypervisor, Os, Relationship};
use osidb_core::{EntityKind, Filter};

/// Build a small distribution catalog: two Fedora releases, RHEL, and a
/// CentOS clone, with upgrade/clone relations recorded.
fn distro_db() -> Db {
    let mut db = Db::new();

    db.add_os(
        Os::new("fedora15")
            .unwrap()
            .with_param("vendor", "Fedora")
            .with_param("arch", "x86")
            .with_param("arch", "x86_64"),
    );
    let mut fedora16 = Os::new("fedora16")
        .unwrap()
        .with_param("vendor", "Fedora")
        .with_param("arch", "x86")
        .with_param("arch", "x86_64");
    fedora16.add_relation(Relationship::Upgrades, "fedora15");
    db.add_os(fedora16);

    db.add_os(
        Os::new("rhel6").unwrap().with_param("vendor", "Red Hat").with_param("arch", "x86_64"),
    );
    let mut centos6 = Os::new("centos6").unwrap().with_param("vendor", "CentOS");
    centos6.add_relation(Relationship::Clones, "rhel6");
    centos6.add_relation(Relationship::DerivesFrom, "rhel6");
    db.add_os(centos6);

    db.add_device(Device::new("devA").unwrap().with_param("class", "net"));
    db.add_device(Device::new("devB").unwrap().with_param("class", "net"));
    db.add_device(Device::new("devC").unwrap().with_param("class", "disk"));

    let mut kvm = Hypervisor::new("kvm").unwrap().with_param("vendor", "Red Hat");
    kvm.add_device_to_section("net", "devA", "e1000").unwrap();
    kvm.add_device_to_section("net", "devB", "virtio").unwrap();
    kvm.add_device_to_section("disk", "devC", "virtio-blk").unwrap();
    db.add_hypervisor(kvm);

    db
}

#[test]
fn vendor_enumeration_and_filtering() {
    let db = distro_db();

    let vendors = db.unique_values_for_property(EntityKind::Os, "vendor");
    let vendors: Vec<_> = vendors.iter().map(String::as_str).collect();
    assert_eq!(vendors, ["CentOS", "Fedora", "Red Hat"]);

    let fedora = db.get_os_list(&Filter::new().with_constraint("vendor", "Fedora"));
    let ids: Vec<_> = fedora.iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["fedora15", "fedora16"]);
}

#[test]
fn multi_valued_arch_disjunction() {
    let db = distro_db();

    // "arch is x86 or x86_64" via two constraints on the same property
    let filter = Filter::new().with_constraint("arch", "x86").with_constraint("arch", "x86_64");
    assert_eq!(db.get_os_list(&filter).len(), 3);

    // rhel6 only carries x86_64
    let x86_only = Filter::new().with_constraint("arch", "x86");
    let ids: Vec<_> = db.get_os_list(&x86_only).iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["fedora15", "fedora16"]);
}

#[test]
fn set_operations_over_query_results() {
    let db = distro_db();

    let fedora = db.get_os_list(&Filter::new().with_constraint("vendor", "Fedora"));
    let x86_64 = db.get_os_list(&Filter::new().with_constraint("arch", "x86_64"));

    let both = fedora.intersect(&x86_64);
    let ids: Vec<_> = both.iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["fedora15", "fedora16"]);

    let either = fedora.union(&x86_64);
    let ids: Vec<_> = either.iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["fedora15", "fedora16", "rhel6"]);
}

#[test]
fn relationship_queries() {
    let db = distro_db();

    let fedora16 = db.get_os("fedora16").unwrap();
    let targets: Vec<_> = fedora16.related(Relationship::Upgrades).map(|id| id.as_str()).collect();
    assert_eq!(targets, ["fedora15"]);

    // No auto-inverse: fedora15 records nothing
    let fedora15 = db.get_os("fedora15").unwrap();
    assert_eq!(fedora15.related(Relationship::Upgrades).count(), 0);

    let upgraders = db.get_oses_with_relationship(Relationship::Upgrades);
    let ids: Vec<_> = upgraders.iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["fedora16"]);

    let cloners = db.get_oses_with_relationship(Relationship::Clones);
    let ids: Vec<_> = cloners.iter().map(|os| os.id().as_str()).collect();
    assert_eq!(ids, ["centos6"]);
}

#[test]
fn device_sections_end_to_end() {
    let mut db = distro_db();

    let kvm = db.get_hypervisor("kvm").unwrap();
    let names: Vec<_> = kvm.section_names().collect();
    assert_eq!(names, ["disk", "net"]);

    let net = kvm.get_devices_in_section(&db, "net", &Filter::new());
    let ids: Vec<_> = net.iter().map(|dev| dev.id().as_str()).collect();
    assert_eq!(ids, ["devA", "devB"]);

    let disk_only = Filter::new().with_constraint("class", "disk");
    assert!(kvm.get_devices_in_section(&db, "net", &disk_only).is_empty());

    db.get_hypervisor_mut("kvm").unwrap().clear_section("net");
    let kvm = db.get_hypervisor("kvm").unwrap();
    assert!(kvm.get_devices_in_section(&db, "net", &Filter::new()).is_empty());
    assert_eq!(kvm.section_names().collect::<Vec<_>>(), ["disk"]);
}

#[test]
fn reload_merge_replaces_records() {
    let mut db = distro_db();

    // A loader re-processing its source re-inserts under the same id
    let replaced =
        db.add_os(Os::new("rhel6").unwrap().with_param("vendor", "Red Hat, Inc."));
    assert!(replaced.is_some());
    assert_eq!(db.get_os("rhel6").unwrap().get_param("vendor"), Some("Red Hat, Inc."));
    assert_eq!(db.os_count(), 4);

    let vendors = db.unique_values_for_property(EntityKind::Os, "vendor");
    assert!(vendors.contains("Red Hat, Inc."));
    assert!(!vendors.contains("Red Hat"));
}

#[test]
fn list_building_is_deterministic() {
    let db = distro_db();

    let first: Vec<_> =
        db.get_os_list(&Filter::new()).iter().map(|os| os.id().to_string()).collect();
    let second: Vec<_> =
        db.get_os_list(&Filter::new()).iter().map(|os| os.id().to_string()).collect();
    assert_eq!(first, second);

    // Sorted-identifier order, independent of insertion order
    assert_eq!(first, ["centos6", "fedora15", "fedora16", "rhel6"]);
}

#[test]
fn records_serialize_for_loaders() {
    let mut fedora16 = Os::new("fedora16").unwrap().with_param("vendor", "Fedora");
    fedora16.add_relation(Relationship::Upgrades, "fedora15");

    let json = serde_json::to_string(&fedora16).unwrap();
    let decoded: Os = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, fedora16);

    let mut kvm = Hypervisor::new("kvm").unwrap();
    kvm.add_device_to_section("net", "devA", "e1000").unwrap();
    let json = serde_json::to_string(&kvm).unwrap();
    let decoded: Hypervisor = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, kvm);
}
