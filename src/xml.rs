// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A small owned XML element tree, read and written with `quick-xml`.
//!
//! Blocks build and inspect their XML fragments through [`XmlElement`], so
//! that none of them need to deal with the event level API.

use std::io::Cursor;
use std::str::FromStr;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::Error;

type XmlWriter = Cursor<Vec<u8>>;

/// An XML element with its attributes, in document order, and its child
/// elements.  Text content is not represented.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates a new element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder style variant of [`set_attribute`][Self::set_attribute].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder style variant of [`push_child`][Self::push_child].
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_child(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute, replacing the value if the key already exists.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Returns the value of the given attribute, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// Returns the first child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the value of the given attribute, or an error if it is missing.
    pub(crate) fn required_attribute(&self, key: &str) -> Result<&str, Error> {
        self.attribute(key).ok_or_else(|| {
            Error::xml(format!(
                "Missing attribute `{key}` on element <{}>.",
                self.name
            ))
        })
    }

    /// Parses the value of the given attribute.
    ///
    /// A missing attribute is an `Xml` error, a malformed value a `Parse`
    /// error.
    pub(crate) fn parse_attribute<T: FromStr>(&self, key: &str) -> Result<T, Error> {
        let value = self.required_attribute(key)?;
        value.trim().parse().map_err(|_| {
            Error::parse(format!(
                "Invalid value for `{key}` on element <{}>: {value}",
                self.name
            ))
        })
    }

    /// Parses a boolean attribute, defaulting to `false` when it is missing.
    ///
    /// Accepts `true`/`false` in any letter case, as well as `1`/`0`.
    pub(crate) fn parse_flag(&self, key: &str) -> Result<bool, Error> {
        let Some(value) = self.attribute(key) else {
            return Ok(false);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::parse(format!(
                "Invalid value for `{key}` on element <{}>: {value}",
                self.name
            ))),
        }
    }

    /// Serializes the element and its children into an indented XML string.
    pub fn to_xml_string(&self) -> Result<String, Error> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        self.write_xml(&mut writer)?;
        String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
    }

    /// Parses an XML document and returns its root element.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut reader = Reader::from_str(input);
        let mut stack: Vec<XmlElement> = vec![];
        let mut root = None;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::xml("Unexpected closing tag."))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::xml(format!("Unclosed element <{}>.", open.name)));
        }
        root.ok_or_else(|| Error::xml("No root element found."))
    }

    fn write_xml(&self, writer: &mut Writer<XmlWriter>) -> Result<(), Error> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(xml_error);
        }

        writer.write_event(Event::Start(start)).map_err(xml_error)?;
        for child in &self.children {
            child.write_xml(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_error)
    }

    fn from_start(start: &BytesStart) -> Result<Self, Error> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(xml_error)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<(), Error> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
        } else if root.is_some() {
            return Err(Error::xml(format!(
                "Multiple root elements found: <{}>.",
                element.name
            )));
        } else {
            *root = Some(element);
        }
        Ok(())
    }
}

fn xml_error(err: impl std::fmt::Display) -> Error {
    Error::xml(err.to_string())
}
