use serde::{Deserialize, Serialize};

use crate::language::FileCategory;

/// Eclipse Public License 2.0 header for Java sources.
///
/// The first line is the comment body right after the opening `/*`.
pub const DEFAULT_JAVA_TEMPLATE: &str = "\
******************************************************************************
 * Copyright (c) {years} {holder} and/or its affiliates and others
 *
 * This program and the accompanying materials are made
 * available under the terms of the Eclipse Public License 2.0
 * which is available at https://www.eclipse.org/legal/epl-2.0/
 *
 * SPDX-License-Identifier: EPL-2.0
 *
 * Contributors:
 *  {holder}
";

/// Eclipse Public License 2.0 header for XML documents.
pub const DEFAULT_XML_TEMPLATE: &str = "
    Copyright (c) {years} {holder} and/or its affiliates and others

    This program and the accompanying materials are made
    available under the terms of the Eclipse Public License 2.0
    which is available at https://www.eclipse.org/legal/epl-2.0/

    SPDX-License-Identifier: EPL-2.0

    Contributors:
     {holder}
";

/// Checker configuration, read from `.copyright-guard.toml`.
///
/// A template left out of the document falls back to its built-in default.
/// An empty template disables checking for that category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_java_template")]
    pub template_java: String,

    #[serde(default = "default_xml_template")]
    pub template_xml: String,

    #[serde(default)]
    pub template_c: String,

    /// Skip the copyright year freshness check.
    #[serde(default)]
    pub bypass_year_check: bool,

    /// Paths to skip, in `.gitignore` syntax.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_java: default_java_template(),
            template_xml: default_xml_template(),
            template_c: String::new(),
            bypass_year_check: false,
            ignore: Vec::new(),
        }
    }
}

impl Config {
    /// The template configured for `category`, or `None` when disabled.
    #[must_use]
    pub fn template_for(&self, category: FileCategory) -> Option<&str> {
        let template = match category {
            FileCategory::Java => &self.template_java,
            FileCategory::Xml => &self.template_xml,
            FileCategory::C => &self.template_c,
        };
        (!template.trim().is_empty()).then_some(template.as_str())
    }

    /// All enabled templates, in category order.
    pub fn templates(&self) -> impl Iterator<Item = (FileCategory, &str)> {
        FileCategory::ALL
            .into_iter()
            .filter_map(|category| self.template_for(category).map(|t| (category, t)))
    }
}

fn default_java_template() -> String {
    DEFAULT_JAVA_TEMPLATE.to_string()
}

fn default_xml_template() -> String {
    DEFAULT_XML_TEMPLATE.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
