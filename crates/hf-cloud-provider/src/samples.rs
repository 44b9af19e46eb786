//! Realistic parser outputs for tests and demos.
//!
//! DMI tables mirror `dmidecode` dumps from bare-metal HP, EC2 Xen, GCE and
//! oVirt guests; package and repository lists mirror `rpm -qa` and
//! `yum repolist` output.

use hf_protocol::{DmiRecord, DmiRecordKind, DmiTable, HostSnapshot};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ── Packages ──────────────────────────────────────────────────

pub fn rpms_plain() -> Vec<String> {
    strings(&[
        "gnome-terminal-3.28.2-2.fc28.x86_64",
        "python3-IPy-0.81-21.fc28.noarch",
        "gnu-free-serif-fonts-20120503-17.fc28.noarch",
    ])
}

fn rpms_with(extra: &str) -> Vec<String> {
    let mut rpms = rpms_plain();
    rpms.push(extra.to_string());
    rpms
}

pub fn rpms_aws() -> Vec<String> {
    rpms_with("rh-amazon-rhui-client-2.2.124-1.el7")
}

pub fn rpms_google() -> Vec<String> {
    rpms_with("google-rhui-client-5.1.100-1.el7")
}

pub fn rpms_azure() -> Vec<String> {
    rpms_with("WALinuxAgent-2.2.18-1.el7")
}

// ── Repositories ──────────────────────────────────────────────

pub fn repos_rhel() -> Vec<String> {
    strings(&["rhel-6-server-rpms", "rhel-6-server-satellite-tools-6.3-rpms"])
}

pub fn repos_azure() -> Vec<String> {
    strings(&[
        "rhel-6-server-rpms",
        "rhel-6-server-satellite-tools-6.3-rpms",
        "rhui-microsoft-azure-rhel7-2.2-74",
    ])
}

// ── DMI ───────────────────────────────────────────────────────

fn bios(vendor: &str, version: &str) -> DmiRecord {
    DmiRecord::new(DmiRecordKind::BiosInformation)
        .with_handle("0x0000")
        .with_field("vendor", vendor)
        .with_field("version", version)
        .with_field("release_date", "12/09/2016")
}

fn system(manufacturer: &str, version: &str, uuid: &str) -> DmiRecord {
    DmiRecord::new(DmiRecordKind::SystemInformation)
        .with_handle("0x0100")
        .with_field("manufacturer", manufacturer)
        .with_field("version", version)
        .with_field("uuid", uuid)
}

fn chassis(manufacturer: &str, asset_tag: &str) -> DmiRecord {
    DmiRecord::new(DmiRecordKind::ChassisInformation)
        .with_handle("0x0300")
        .with_field("manufacturer", manufacturer)
        .with_field("asset_tag", asset_tag)
}

/// Xen guest on EC2: System Information carries the EC2 UUID.
fn xen_system() -> DmiRecord {
    system("Xen", "4.2.amazon", "EC2F58AF-2DAD-C57E-88C0-A81CB6084290")
}

pub fn dmi_hp_proliant() -> DmiTable {
    DmiTable::new(vec![
        bios("HP", "P70"),
        system("HP", "Not Specified", "34373936-3439-4D32-3233-333630303036"),
        chassis("HP", ""),
        DmiRecord::new(DmiRecordKind::Other)
            .with_handle("0x0401")
            .with_field("manufacturer", "Bochs"),
    ])
}

pub fn dmi_aws() -> DmiTable {
    DmiTable::new(vec![
        bios("Xen", "4.2.amazon"),
        xen_system(),
        chassis("Xen", "Not Specified"),
    ])
}

/// BIOS version is plain `4.2`; only the UUID points at EC2.
pub fn dmi_aws_uuid() -> DmiTable {
    DmiTable::new(vec![
        bios("Xen", "4.2"),
        xen_system(),
        chassis("Xen", "Not Specified"),
    ])
}

/// GCE BIOS over a system record that still looks like EC2.
pub fn dmi_google() -> DmiTable {
    DmiTable::new(vec![
        bios("Google", "Google"),
        xen_system(),
        chassis("Xen", "Not Specified"),
    ])
}

pub fn dmi_azure_asset_tag() -> DmiTable {
    DmiTable::new(vec![
        bios("SeaBIOS", "1.11.0-2.el7"),
        system(
            "oVirt",
            "7-5.1804.4.el7.centos",
            "a35ae32b-ed0a-49a4-9dbb-eecf21f88aab",
        ),
        chassis("Red Hat", "7783-7084-3265-9085-8269-3286-77"),
    ])
}

// ── Snapshots ─────────────────────────────────────────────────

pub fn snapshot(
    hostname: &str,
    packages: Vec<String>,
    dmi: DmiTable,
    repositories: Vec<String>,
) -> HostSnapshot {
    HostSnapshot {
        hostname: Some(hostname.to_string()),
        packages: Some(packages),
        dmi: Some(dmi),
        repositories: Some(repositories),
    }
}

pub fn snapshot_bare_metal() -> HostSnapshot {
    snapshot("hp-dl380", rpms_plain(), dmi_hp_proliant(), repos_rhel())
}

/// Google BIOS vendor against an EC2-looking UUID and an Azure repo.
pub fn snapshot_google_conflict() -> HostSnapshot {
    snapshot("gce-01", rpms_plain(), dmi_google(), repos_azure())
}
