//! Aggregator (reactor) POM generation
//!
//! The aggregator is a synthetic descriptor that lists every discovered
//! project as a `<module>`, letting Maven build the whole set in one
//! invocation. Generation is pure: it produces the serialized document,
//! and the command layer decides where (and whether) to write it.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::discovery::ProjectDescriptor;
use crate::error::{hints, MvnsetError};
use crate::pom::Coordinates;
use crate::utils::paths::to_unix;

const POM_XMLNS: &str = "http://maven.apache.org/POM/4.0.0";
const POM_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd";

/// A synthesized top-level descriptor listing sub-projects as modules
#[derive(Debug, Clone)]
pub struct Aggregator {
    coordinates: Coordinates,
    name: Option<String>,
    modules: Vec<String>,
}

impl Aggregator {
    /// Build an aggregator from a discovered project set.
    ///
    /// Modules are the relative paths from `root` to each project strictly
    /// inside it, in discovery order. Fails with a conflict when `root`
    /// itself already holds a descriptor and `force` is not set, and with
    /// an empty-set error when there is nothing to aggregate.
    pub fn from_discovered(
        discovered: &[ProjectDescriptor],
        root: &Path,
        descriptor_file: &str,
        coordinates: Coordinates,
        name: Option<String>,
        force: bool,
    ) -> Result<Self> {
        let existing = root.join(descriptor_file);
        if existing.is_file() && !force {
            return Err(MvnsetError::conflict(existing, hints::overwrite()).into());
        }

        let modules: Vec<String> = discovered
            .iter()
            .filter_map(|project| {
                let relative = project.dir.strip_prefix(root).ok()?;
                // The root itself never lists itself as a module.
                if relative.as_os_str().is_empty() {
                    return None;
                }
                Some(to_unix(relative))
            })
            .collect();

        Self::from_modules(modules, root, coordinates, name)
    }

    /// Build an aggregator from an explicit module list (e.g. read from
    /// stdin). `root` is only used for error reporting.
    pub fn from_modules(
        modules: Vec<String>,
        root: &Path,
        coordinates: Coordinates,
        name: Option<String>,
    ) -> Result<Self> {
        if modules.is_empty() {
            return Err(MvnsetError::EmptySet {
                root: root.to_path_buf(),
            }
            .into());
        }

        Ok(Self {
            coordinates,
            name,
            modules,
        })
    }

    /// The module list, in discovery order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Serialize the aggregator as a Maven POM document
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut project = BytesStart::new("project");
        project.push_attribute(("xmlns", POM_XMLNS));
        project.push_attribute(("xmlns:xsi", POM_XSI));
        project.push_attribute(("xsi:schemaLocation", POM_SCHEMA_LOCATION));
        writer.write_event(Event::Start(project))?;

        write_text_element(&mut writer, "modelVersion", "4.0.0")?;
        write_text_element(&mut writer, "groupId", &self.coordinates.group_id)?;
        write_text_element(&mut writer, "artifactId", &self.coordinates.artifact_id)?;
        write_text_element(&mut writer, "version", &self.coordinates.version)?;
        write_text_element(&mut writer, "packaging", "pom")?;

        if let Some(name) = &self.name {
            write_text_element(&mut writer, "name", name)?;
        }

        writer.write_event(Event::Start(BytesStart::new("modules")))?;
        for module in &self.modules {
            write_text_element(&mut writer, "module", module)?;
        }
        writer.write_event(Event::End(BytesEnd::new("modules")))?;

        writer.write_event(Event::End(BytesEnd::new("project")))?;

        let mut bytes = writer.into_inner().into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).context("Generated POM is not valid UTF-8")
    }
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{discover, DiscoveryOptions};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch_pom(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("pom.xml"), "<project/>").unwrap();
    }

    fn discovered(root: &Path) -> Vec<ProjectDescriptor> {
        discover(root, &DiscoveryOptions::default())
            .unwrap()
            .collect()
    }

    #[test]
    fn modules_are_relative_paths_in_discovery_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch_pom(&root.join("a"));
        touch_pom(&root.join("b/c"));

        let aggregator = Aggregator::from_discovered(
            &discovered(root),
            root,
            "pom.xml",
            Coordinates::default(),
            None,
            false,
        )
        .unwrap();

        assert_eq!(aggregator.modules(), &["a", "b/c"]);
    }

    #[test]
    fn every_module_resolves_back_to_a_discovered_project() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch_pom(&root.join("x"));
        touch_pom(&root.join("y/z"));

        let set = discovered(root);
        let aggregator = Aggregator::from_discovered(
            &set,
            root,
            "pom.xml",
            Coordinates::default(),
            None,
            false,
        )
        .unwrap();

        assert_eq!(aggregator.modules().len(), set.len());
        for module in aggregator.modules() {
            let resolved = root.join(module);
            assert!(set.iter().any(|p| p.dir == resolved));
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let err = Aggregator::from_discovered(
            &[],
            root,
            "pom.xml",
            Coordinates::default(),
            None,
            false,
        )
        .unwrap_err();
        let domain = err.downcast_ref::<MvnsetError>().unwrap();
        assert!(matches!(domain, MvnsetError::EmptySet { .. }));
    }

    #[test]
    fn descriptor_at_root_is_a_conflict_unless_forced() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch_pom(root);
        touch_pom(&root.join("a"));
        let before = fs::read_to_string(root.join("pom.xml")).unwrap();

        let err = Aggregator::from_discovered(
            &discovered(root),
            root,
            "pom.xml",
            Coordinates::default(),
            None,
            false,
        )
        .unwrap_err();
        let domain = err.downcast_ref::<MvnsetError>().unwrap();
        assert!(matches!(domain, MvnsetError::Conflict { .. }));
        // The existing descriptor is left untouched.
        assert_eq!(fs::read_to_string(root.join("pom.xml")).unwrap(), before);

        let aggregator = Aggregator::from_discovered(
            &discovered(root),
            root,
            "pom.xml",
            Coordinates::default(),
            None,
            true,
        )
        .unwrap();
        assert_eq!(aggregator.modules(), &["a"]);
    }

    #[test]
    fn projects_outside_root_are_not_listed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("inner");
        touch_pom(&root.join("a"));

        let outside = ProjectDescriptor {
            dir: temp_dir.path().join("elsewhere"),
            descriptor: temp_dir.path().join("elsewhere/pom.xml"),
        };
        let mut set = discovered(&root);
        set.push(outside);

        let aggregator = Aggregator::from_discovered(
            &set,
            &root,
            "pom.xml",
            Coordinates::default(),
            None,
            false,
        )
        .unwrap();
        assert_eq!(aggregator.modules(), &["a"]);
    }

    #[test]
    fn xml_carries_coordinates_packaging_and_modules() {
        let root = PathBuf::from("/tmp/does-not-matter");
        let aggregator = Aggregator::from_modules(
            vec!["a".to_string(), "b/c".to_string()],
            &root,
            "com.example:everything:3.0".parse().unwrap(),
            Some("Everything".to_string()),
        )
        .unwrap();

        let xml = aggregator.to_xml().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(xml.contains("<groupId>com.example</groupId>"));
        assert!(xml.contains("<artifactId>everything</artifactId>"));
        assert!(xml.contains("<version>3.0</version>"));
        assert!(xml.contains("<packaging>pom</packaging>"));
        assert!(xml.contains("<name>Everything</name>"));
        assert!(xml.contains("<module>a</module>"));
        assert!(xml.contains("<module>b/c</module>"));
        let modules_pos = xml.find("<module>a</module>").unwrap();
        let second_pos = xml.find("<module>b/c</module>").unwrap();
        assert!(modules_pos < second_pos);
    }

    #[test]
    fn module_text_is_escaped() {
        let root = PathBuf::from("/tmp/does-not-matter");
        let aggregator = Aggregator::from_modules(
            vec!["a&b".to_string()],
            &root,
            Coordinates::default(),
            None,
        )
        .unwrap();

        let xml = aggregator.to_xml().unwrap();
        assert!(xml.contains("<module>a&amp;b</module>"));
    }

    #[test]
    fn name_is_omitted_when_absent() {
        let root = PathBuf::from("/tmp/does-not-matter");
        let aggregator = Aggregator::from_modules(
            vec!["a".to_string()],
            &root,
            Coordinates::default(),
            None,
        )
        .unwrap();

        assert!(!aggregator.to_xml().unwrap().contains("<name>"));
    }
}
