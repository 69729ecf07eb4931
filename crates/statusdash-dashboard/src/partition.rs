//! Persistent vs. setup service grouping

use statusdash_core::Service;
use std::collections::{HashMap, HashSet};

/// Split `services` into the services named in `fixed_order` (in that order)
/// and everything else (in original order).
///
/// Duplicate names are not expected; if present, the last occurrence is the
/// one placed in the persistent group.
pub fn partition<'a, S: AsRef<str>>(
    services: &'a [Service],
    fixed_order: &[S],
) -> (Vec<&'a Service>, Vec<&'a Service>) {
    let by_name: HashMap<&str, &Service> = services
        .iter()
        .map(|svc| (svc.name.as_str(), svc))
        .collect();

    let mut seen = HashSet::new();
    let mut persistent = Vec::with_capacity(fixed_order.len());
    for name in fixed_order {
        let name = name.as_ref();
        if let Some(svc) = by_name.get(name) {
            if seen.insert(name) {
                persistent.push(*svc);
            }
        }
    }

    let other = services
        .iter()
        .filter(|svc| !seen.contains(svc.name.as_str()))
        .collect();

    (persistent, other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc(name: &str) -> Service {
        Service {
            name: name.to_string(),
            label: name.to_string(),
            ..Default::default()
        }
    }

    fn names(group: &[&Service]) -> Vec<String> {
        group.iter().map(|s| s.name.clone()).collect()
    }

    const ORDER: [&str; 4] = ["ac-mysql", "ac-authserver", "ac-worldserver", "ac-backup"];

    #[test]
    fn test_partition_orders_persistent_by_fixed_list() {
        let services = vec![
            svc("ac-worldserver"),
            svc("ac-db-import"),
            svc("ac-mysql"),
            svc("ac-client-data"),
            svc("ac-authserver"),
        ];

        let (persistent, other) = partition(&services, &ORDER);
        assert_eq!(
            names(&persistent),
            vec!["ac-mysql", "ac-authserver", "ac-worldserver"]
        );
        assert_eq!(names(&other), vec!["ac-db-import", "ac-client-data"]);
    }

    #[test]
    fn test_partition_is_a_permutation() {
        let services: Vec<Service> = ["x", "ac-backup", "y", "ac-mysql", "z"]
            .iter()
            .map(|n| svc(n))
            .collect();

        let (persistent, other) = partition(&services, &ORDER);
        let mut all: Vec<String> = names(&persistent);
        all.extend(names(&other));
        assert_eq!(all.len(), services.len());

        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), services.len());
        for s in &services {
            assert!(all.contains(&s.name));
        }
    }

    #[test]
    fn test_unknown_services_never_persistent() {
        let services = vec![svc("web"), svc("worker")];
        let (persistent, other) = partition(&services, &ORDER);
        assert!(persistent.is_empty());
        assert_eq!(names(&other), vec!["web", "worker"]);
    }

    #[test]
    fn test_empty_inputs() {
        let (persistent, other) = partition::<&str>(&[], &[]);
        assert!(persistent.is_empty());
        assert!(other.is_empty());

        let services = vec![svc("ac-mysql")];
        let (persistent, other) = partition::<String>(&services, &[]);
        assert!(persistent.is_empty());
        assert_eq!(names(&other), vec!["ac-mysql"]);
    }

    #[test]
    fn test_repeated_name_in_fixed_order_listed_once() {
        let services = vec![svc("ac-mysql")];
        let (persistent, other) = partition(&services, &["ac-mysql", "ac-mysql"]);
        assert_eq!(names(&persistent), vec!["ac-mysql"]);
        assert!(other.is_empty());
    }
}
