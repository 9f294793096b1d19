// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Reading and writing a [`Network`] as XML.

use crate::{Block, BlockRegistry, Connection, Error, Network, NetworkConfig, XmlElement};

/// XML import and export.
impl Network {
    /// Serializes the network into an XML document.
    ///
    /// Automatically generated connections are left out, so a prepared
    /// network exports the same topology it was built from.
    pub fn export_xml(&self) -> Result<String, Error> {
        self.to_xml_element().to_xml_string()
    }

    /// Builds the `<Network>` element written by
    /// [`export_xml`][Self::export_xml].
    pub fn to_xml_element(&self) -> XmlElement {
        let mut connection_list = XmlElement::new("ConnectionList");
        for connection in self.connections() {
            connection_list.push_child(
                XmlElement::new("Connection")
                    .with_attribute("index", connection.index())
                    .with_attribute("name", connection.name())
                    .with_attribute("exergy_value", connection.exergy_value())
                    .with_attribute("is_fluid_stream", connection.is_fluid_stream())
                    .with_attribute("is_useful_effect", connection.is_useful_effect()),
            );
        }

        let mut blocks = self.blocks().collect::<Vec<_>>();
        blocks.sort_by_key(|b| b.id());
        let mut block_list = XmlElement::new("BlockList");
        for block in blocks {
            block_list.push_child(
                XmlElement::new("Block")
                    .with_attribute("index", block.id())
                    .with_attribute("name", block.name())
                    .with_attribute("type", block.type_name())
                    .with_child(block.export_xml_other_parameters())
                    .with_child(block.export_xml_connection_list(&self.connections)),
            );
        }

        XmlElement::new("Network")
            .with_child(connection_list)
            .with_child(block_list)
    }

    /// Builds a network from an XML document, resolving block types through
    /// the given registry.
    ///
    /// Connections are loaded first, so that blocks can refer to them.
    pub fn from_xml(
        input: &str,
        registry: BlockRegistry,
        config: NetworkConfig,
    ) -> Result<Network, Error> {
        let root = XmlElement::parse(input)?;
        if root.name() != "Network" {
            return Err(Error::xml(format!(
                "Expected <Network> root element, found <{}>.",
                root.name()
            )));
        }

        let mut network = Network::with_registry(registry, config);
        if let Some(list) = root.child("ConnectionList") {
            for element in list.children() {
                network.load_connection(element)?;
            }
        }
        if let Some(list) = root.child("BlockList") {
            for element in list.children() {
                network.load_block(element)?;
            }
        }
        network.rebuild_edges();

        tracing::debug!(
            "Loaded network with {} blocks and {} connections.",
            network.block_indices.len(),
            network.connections.len()
        );
        Ok(network)
    }

    /// Applies an `<Other>` element to the variant of the block with the
    /// given `id`.
    pub fn append_xml_other_parameters(
        &mut self,
        id: u64,
        element: &XmlElement,
    ) -> Result<(), Error> {
        let idx = self.node_index(id)?;
        self.graph[idx].append_xml_other_parameters(element)
    }

    fn load_connection(&mut self, element: &XmlElement) -> Result<(), Error> {
        if element.name() != "Connection" {
            return Err(Error::xml(format!(
                "Unexpected element <{}> in <ConnectionList>.",
                element.name()
            )));
        }
        let mut connection = Connection::new(element.parse_attribute("index")?, None)
            .with_name(element.attribute("name").unwrap_or_default())
            .with_fluid_stream(element.parse_flag("is_fluid_stream")?);
        if element.attribute("exergy_value").is_some() {
            connection.exergy_value = element.parse_attribute("exergy_value")?;
        }
        connection.is_useful_effect = element.parse_flag("is_useful_effect")?;
        self.connections.insert(connection)?;
        Ok(())
    }

    fn load_block(&mut self, element: &XmlElement) -> Result<(), Error> {
        if element.name() != "Block" {
            return Err(Error::xml(format!(
                "Unexpected element <{}> in <BlockList>.",
                element.name()
            )));
        }
        let id = element.parse_attribute("index")?;
        let type_name = element.required_attribute("type")?;
        let name = element.attribute("name").unwrap_or_default();

        let mut variant = self.registry.create(type_name)?;
        if let Some(other) = element.child("Other") {
            variant.append_xml_other_parameters(other)?;
        }
        self.insert_block(Block::new(id, name, type_name, variant))?;

        let Some(connections) = element.child("Connections") else {
            return Ok(());
        };
        let idx = self.node_index(id)?;
        let strict = self.config.reject_unresolved_connections;
        let displaced =
            self.graph[idx].append_xml_connection_list(connections, &mut self.connections, strict)?;
        self.apply_displaced(displaced);
        Ok(())
    }
}
