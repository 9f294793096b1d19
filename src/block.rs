// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A node of the plant graph, together with its connection bookkeeping.

use crate::connection::{Connection, ConnectionTable};
use crate::{BlockVariant, Error, NetworkConfig, SupportBlock, TableCell, XmlElement, ZoneType};

/// The lifecycle of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockState {
    /// No connections registered yet.
    Created,
    /// Has connections, but no input the balance could start from.
    Configured,
    /// [`Block::is_ready_for_calculation`] holds.
    Ready,
    /// The net output has been materialized as a useful-effect connection.
    Calculated,
}

/// A block of the plant, representing one physical component.
///
/// Blocks only hold connection indices.  The connections themselves live in
/// the [`ConnectionTable`] of the [`Network`][crate::Network] that owns the
/// block.
#[derive(Debug)]
pub struct Block {
    id: u64,
    name: String,
    type_name: String,
    variant: Box<dyn BlockVariant>,
    input_connections: Vec<u64>,
    output_connections: Vec<u64>,
    support_block: Option<SupportBlock>,
    calculated: bool,
}

/// A connection that was taken over from another block, which must drop it.
pub(crate) struct Displaced {
    pub(crate) block: u64,
    pub(crate) connection: u64,
}

impl Block {
    pub(crate) fn new(
        id: u64,
        name: impl Into<String>,
        type_name: impl Into<String>,
        variant: Box<dyn BlockVariant>,
    ) -> Self {
        let support_block = variant
            .connection_families()
            .support
            .map(|_| SupportBlock::new(id));
        Self {
            id,
            name: name.into(),
            type_name: type_name.into(),
            variant,
            input_connections: Vec::new(),
            output_connections: Vec::new(),
            support_block,
            calculated: false,
        }
    }

    /// Returns the id the block was created with.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the discriminator the block's variant was resolved from.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn variant(&self) -> &dyn BlockVariant {
        self.variant.as_ref()
    }

    pub fn input_connections(&self) -> &[u64] {
        &self.input_connections
    }

    pub fn output_connections(&self) -> &[u64] {
        &self.output_connections
    }

    pub fn support_block(&self) -> Option<&SupportBlock> {
        self.support_block.as_ref()
    }

    pub fn state(&self) -> BlockState {
        if self.calculated {
            BlockState::Calculated
        } else if self.is_ready_for_calculation() {
            BlockState::Ready
        } else if self.connection_indices().next().is_some() {
            BlockState::Configured
        } else {
            BlockState::Created
        }
    }

    /// Returns the indices of all connections registered on the block or its
    /// support block.
    pub fn connection_indices(&self) -> impl Iterator<Item = u64> + '_ {
        let support = self
            .support_block
            .iter()
            .flat_map(|s| s.input_connections().iter().chain(s.output_connections()));
        self.input_connections
            .iter()
            .chain(&self.output_connections)
            .chain(support)
            .copied()
    }

    fn contains(&self, index: u64) -> bool {
        self.input_connections.contains(&index)
            || self.output_connections.contains(&index)
            || self.support_block.as_ref().is_some_and(|s| s.contains(index))
    }

    /// Registers a connection as an input or output of the block.
    ///
    /// With `append_to_support_block` set to `Some(0)`, the connection goes to
    /// the support block instead.  A `None` connection is ignored, and so is a
    /// connection that is already registered on this block.
    ///
    /// Returns the block that previously held the same end of the
    /// connection, if any.
    pub(crate) fn add_connection(
        &mut self,
        connection: Option<&mut Connection>,
        is_input: bool,
        append_to_support_block: Option<usize>,
    ) -> Result<Option<Displaced>, Error> {
        let Some(connection) = connection else {
            return Ok(None);
        };
        let index = connection.index;

        match append_to_support_block {
            None | Some(0) if self.contains(index) => {
                tracing::trace!(
                    "Connection {} already registered on {}:{}.",
                    index,
                    self.type_name,
                    self.id
                );
                return Ok(None);
            }
            None => {
                if is_input {
                    self.input_connections.push(index);
                } else {
                    self.output_connections.push(index);
                }
            }
            Some(0) => {
                let Some(support) = self.support_block.as_mut() else {
                    return Err(Error::invalid_block(format!(
                        "{}:{} has no support block.",
                        self.type_name, self.id
                    )));
                };
                support.add_connection(connection, is_input);
            }
            Some(n) => {
                return Err(Error::invalid_block(format!(
                    "{}:{} has no support block with index {n}.",
                    self.type_name, self.id
                )));
            }
        }

        let end = if is_input {
            &mut connection.to_block
        } else {
            &mut connection.from_block
        };
        let previous = end.replace(self.id).filter(|b| *b != self.id);
        tracing::trace!(
            "Registered connection {} as {} of {}:{}.",
            index,
            if is_input { "input" } else { "output" },
            self.type_name,
            self.id
        );

        Ok(previous.map(|block| Displaced {
            block,
            connection: index,
        }))
    }

    /// Drops the given connection from the block and its support block.
    pub(crate) fn remove_connection(&mut self, index: u64) {
        self.input_connections.retain(|i| *i != index);
        self.output_connections.retain(|i| *i != index);
        if let Some(support) = self.support_block.as_mut() {
            support.remove_connection(index);
        }
    }

    /// Returns true when the block, or its support block for variants that
    /// have one, has at least one input.
    pub fn is_ready_for_calculation(&self) -> bool {
        match &self.support_block {
            Some(support) => !support.input_connections().is_empty(),
            None => !self.input_connections.is_empty(),
        }
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    /// Materializes the block's net output as a new connection.
    ///
    /// The support block is prepared first, and its link becomes an input of
    /// the block.  Then exactly one automatically generated useful-effect
    /// output carrying the current [`exergy_balance`][Self::exergy_balance]
    /// is appended.  Returns the index of that output.
    pub(crate) fn prepare_for_calculation(
        &mut self,
        table: &mut ConnectionTable,
    ) -> Result<u64, Error> {
        if self.calculated {
            return Err(Error::invariant_violation(format!(
                "{}:{} has already been calculated.",
                self.type_name, self.id
            )));
        }
        if !self.is_ready_for_calculation() {
            return Err(Error::invariant_violation(format!(
                "{}:{} is not ready for calculation.",
                self.type_name, self.id
            )));
        }

        self.prepare_support_block(table);

        let balance = self.exergy_balance(table);
        let index = table.append_connection(Some(self.id));
        let output = table.find_connection_by_index_mut(index).ok_or_else(|| {
            Error::internal(format!("Appended connection {index} not found."))
        })?;
        output.is_useful_effect = true;
        output.exergy_value = balance;
        self.output_connections.push(index);
        self.calculated = true;

        tracing::debug!(
            "Prepared {}:{} with exergy balance {} on connection {}.",
            self.type_name,
            self.id,
            balance,
            index
        );
        Ok(index)
    }

    fn prepare_support_block(&mut self, table: &mut ConnectionTable) {
        let link = self
            .support_block
            .as_mut()
            .and_then(|s| s.prepare_for_calculation(table));
        if let Some(link) = link {
            if !self.input_connections.contains(&link) {
                self.input_connections.push(link);
            }
        }
    }

    /// Returns the exergy balance of the block, as defined by its variant.
    pub fn exergy_balance(&self, table: &ConnectionTable) -> f64 {
        self.variant.exergy_balance(self, table)
    }

    /// Returns whether the block may be removed during the product/fuel
    /// definition pass.
    pub fn can_be_removed_in_pf_definition(&self, config: &NetworkConfig) -> bool {
        !config.pin_blocks_in_pf_definition
            && self.variant.can_be_removed_in_pf_definition().unwrap_or(true)
    }

    pub fn return_other_zone_connections(
        &self,
        zone_type: ZoneType,
        input_connection: u64,
    ) -> Vec<u64> {
        self.variant
            .return_other_zone_connections(zone_type, input_connection)
    }

    pub fn export_xml_other_parameters(&self) -> XmlElement {
        self.variant.export_xml_other_parameters()
    }

    pub(crate) fn append_xml_other_parameters(
        &mut self,
        element: &XmlElement,
    ) -> Result<(), Error> {
        self.variant.append_xml_other_parameters(element)
    }

    /// Serializes the block's connections into a `<Connections>` element.
    ///
    /// The support family comes first, followed by the block's own family.
    /// Automatically generated connections are left out.
    pub fn export_xml_connection_list(&self, table: &ConnectionTable) -> XmlElement {
        let families = self.variant.connection_families();
        let mut element = XmlElement::new("Connections");

        if let (Some(name), Some(support)) = (families.support, &self.support_block) {
            element.push_child(family_element(
                name,
                support.external_input_connections(),
                support.external_output_connections(),
                table,
            ));
        }
        element.push_child(family_element(
            families.main,
            &self.input_connections,
            &self.output_connections,
            table,
        ));

        element
    }

    /// Registers the connections listed in a `<Connections>` element, as
    /// written by [`export_xml_connection_list`][Self::export_xml_connection_list].
    ///
    /// The whole element is validated before any connection is registered,
    /// so on error the block and the table are left unchanged.
    pub(crate) fn append_xml_connection_list(
        &mut self,
        element: &XmlElement,
        table: &mut ConnectionTable,
        strict: bool,
    ) -> Result<Vec<Displaced>, Error> {
        let families = self.variant.connection_families();
        let mut entries = vec![];

        for family in element.children() {
            let append_to_support_block = if Some(family.name()) == families.support {
                Some(0)
            } else if family.name() == families.main {
                None
            } else {
                return Err(Error::xml(format!(
                    "Unknown connection family <{}> for {}:{}.",
                    family.name(),
                    self.type_name,
                    self.id
                )));
            };

            for entry in family.children() {
                let is_input = match entry.name() {
                    "input" => true,
                    "output" => false,
                    other => {
                        return Err(Error::xml(format!(
                            "Unexpected element <{other}> in <{}>.",
                            family.name()
                        )))
                    }
                };
                entries.push(Entry {
                    index: entry.parse_attribute("index")?,
                    is_input,
                    append_to_support_block,
                });
            }
        }

        let entries = resolve(table, entries, strict, self.id)?;
        self.register(table, entries)
    }

    /// Registers connections from a tabular row.
    ///
    /// The variant reads its parameters from the leading cells.  Every
    /// remaining cell is a signed connection index: positive values are
    /// outputs, anything else is an input.  Inputs go to the support block
    /// for variants that have one.  Unknown indices are skipped.
    ///
    /// The whole row is validated before the variant or any connection is
    /// touched, so on error the block and the table are left unchanged.
    pub(crate) fn append_excel_connection_list(
        &mut self,
        cells: &[TableCell],
        table: &mut ConnectionTable,
        strict: bool,
    ) -> Result<Vec<Displaced>, Error> {
        let (parameters, indices) =
            cells.split_at(self.variant.excel_parameter_count().min(cells.len()));
        let support_inputs = self.support_block.as_ref().map(|_| 0);
        let entries = indices
            .iter()
            .map(|cell| -> Result<Entry, Error> {
                let (is_input, index) = cell.as_signed_index()?;
                Ok(Entry {
                    index,
                    is_input,
                    append_to_support_block: if is_input { support_inputs } else { None },
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let entries = resolve(table, entries, strict, self.id)?;

        self.variant.append_excel_parameters(parameters)?;
        self.register(table, entries)
    }

    fn register(
        &mut self,
        table: &mut ConnectionTable,
        entries: Vec<Entry>,
    ) -> Result<Vec<Displaced>, Error> {
        let mut displaced = vec![];
        for entry in entries {
            displaced.extend(self.add_connection(
                table.find_connection_by_index_mut(entry.index),
                entry.is_input,
                entry.append_to_support_block,
            )?);
        }
        Ok(displaced)
    }
}

/// A connection reference read during import.
struct Entry {
    index: u64,
    is_input: bool,
    append_to_support_block: Option<usize>,
}

fn family_element(
    name: &str,
    inputs: &[u64],
    outputs: &[u64],
    table: &ConnectionTable,
) -> XmlElement {
    let mut element = XmlElement::new(name);
    for (tag, indices) in [("input", inputs), ("output", outputs)] {
        for index in indices {
            if table.is_automatically_generated(*index) {
                continue;
            }
            element.push_child(XmlElement::new(tag).with_attribute("index", index));
        }
    }
    element
}

/// Drops the entries whose connection doesn't exist.
///
/// Unknown indices are skipped with a warning, unless `strict` is set.
fn resolve(
    table: &ConnectionTable,
    entries: Vec<Entry>,
    strict: bool,
    block_id: u64,
) -> Result<Vec<Entry>, Error> {
    let mut resolved = Vec::with_capacity(entries.len());
    for entry in entries {
        if table.find_connection_by_index(entry.index).is_some() {
            resolved.push(entry);
        } else if strict {
            return Err(Error::connection_not_found(format!(
                "Connection with index {} not found, referenced by block {block_id}.",
                entry.index
            )));
        } else {
            tracing::warn!(
                "Skipping unknown connection {} referenced by block {}.",
                entry.index,
                block_id
            );
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EfficiencyConverter, Generic};
    use assert_approx_eq::assert_approx_eq;

    fn table() -> Result<ConnectionTable, Error> {
        let mut table = ConnectionTable::new();
        table.insert(Connection::new(1, None).with_exergy_value(100.0))?;
        table.insert(Connection::new(2, None).with_exergy_value(10.0))?;
        table.insert(Connection::new(3, None).with_exergy_value(5.0))?;
        table.insert(Connection::new(4, None).with_exergy_value(40.0))?;
        Ok(table)
    }

    fn alternator(id: u64, efficiency: f64) -> Block {
        Block::new(
            id,
            "gen",
            "Alternator",
            Box::new(EfficiencyConverter::alternator().with_efficiency(efficiency)),
        )
    }

    fn generic(id: u64) -> Block {
        Block::new(id, "pipe", "Generic", Box::new(Generic))
    }

    #[test]
    fn test_add_connection() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = generic(7);

        assert!(block.add_connection(None, true, None)?.is_none());
        assert_eq!(block.state(), BlockState::Created);

        block.add_connection(table.find_connection_by_index_mut(3), false, None)?;
        assert_eq!(block.state(), BlockState::Configured);
        block.add_connection(table.find_connection_by_index_mut(1), true, None)?;
        block.add_connection(table.find_connection_by_index_mut(1), true, None)?;
        block.add_connection(table.find_connection_by_index_mut(1), false, None)?;

        assert_eq!(block.input_connections(), &[1]);
        assert_eq!(block.output_connections(), &[3]);
        assert_eq!(table.find_connection_by_index(1).unwrap().to_block(), Some(7));
        assert_eq!(table.find_connection_by_index(3).unwrap().from_block(), Some(7));

        assert_eq!(
            block
                .add_connection(table.find_connection_by_index_mut(2), true, Some(0))
                .err(),
            Some(Error::invalid_block("Generic:7 has no support block."))
        );
        assert!(block.input_connections().iter().all(|i| *i != 2));

        block.remove_connection(1);
        assert!(block.input_connections().is_empty());
        Ok(())
    }

    #[test]
    fn test_displaced_connection() -> Result<(), Error> {
        let mut table = table()?;
        let mut first = generic(1);
        let mut second = generic(2);

        assert!(first
            .add_connection(table.find_connection_by_index_mut(4), true, None)?
            .is_none());
        let displaced = second
            .add_connection(table.find_connection_by_index_mut(4), true, None)?
            .unwrap();
        assert_eq!((displaced.block, displaced.connection), (1, 4));

        // the other end of the connection doesn't displace anything.
        assert!(first
            .add_connection(table.find_connection_by_index_mut(2), false, None)?
            .is_none());
        assert!(second
            .add_connection(table.find_connection_by_index_mut(2), true, None)?
            .is_none());
        Ok(())
    }

    #[test]
    fn test_support_block_routing() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = alternator(5, 0.9);

        assert!(!block.is_ready_for_calculation());
        block.add_connection(table.find_connection_by_index_mut(1), true, Some(0))?;
        assert!(block.is_ready_for_calculation());
        assert_eq!(block.state(), BlockState::Ready);

        assert!(block.input_connections().is_empty());
        let support = block.support_block().unwrap();
        assert_eq!(support.owner(), 5);
        assert_eq!(support.input_connections(), &[1]);

        assert_eq!(
            block
                .add_connection(table.find_connection_by_index_mut(2), true, Some(1))
                .err(),
            Some(Error::invalid_block(
                "Alternator:5 has no support block with index 1."
            ))
        );

        // a connection already on the support block isn't added to the block.
        block.add_connection(table.find_connection_by_index_mut(1), true, None)?;
        assert!(block.input_connections().is_empty());
        assert_eq!(block.connection_indices().collect::<Vec<_>>(), vec![1]);
        Ok(())
    }

    #[test]
    fn test_readiness_without_support_block() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = generic(3);
        assert!(!block.is_ready_for_calculation());

        block.add_connection(table.find_connection_by_index_mut(2), true, None)?;
        assert!(block.is_ready_for_calculation());
        Ok(())
    }

    #[test]
    fn test_converter_balance() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = alternator(5, 0.9);
        block.add_connection(table.find_connection_by_index_mut(1), true, Some(0))?;
        block.add_connection(table.find_connection_by_index_mut(2), true, None)?;
        block.add_connection(table.find_connection_by_index_mut(3), false, None)?;

        // before the support block is prepared, the through flow isn't seen.
        assert_approx_eq!(block.exergy_balance(&table), 5.0);

        block.prepare_support_block(&mut table);
        assert_approx_eq!(block.exergy_balance(&table), 0.9 * 100.0 + 10.0 - 5.0);
        Ok(())
    }

    #[test]
    fn test_prepare_for_calculation() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = alternator(5, 0.9);

        assert_eq!(
            block.prepare_for_calculation(&mut table),
            Err(Error::invariant_violation(
                "Alternator:5 is not ready for calculation."
            ))
        );

        block.add_connection(table.find_connection_by_index_mut(1), true, Some(0))?;
        block.add_connection(table.find_connection_by_index_mut(2), true, None)?;
        block.add_connection(table.find_connection_by_index_mut(3), false, None)?;
        let output = block.prepare_for_calculation(&mut table)?;

        assert_eq!(block.state(), BlockState::Calculated);
        let link = block.support_block().unwrap().connection_with_main().unwrap();
        assert_eq!(block.input_connections(), &[2, link]);
        assert_eq!(block.output_connections(), &[3, output]);

        let conn = table.find_connection_by_index(output).unwrap();
        assert!(conn.automatically_generated());
        assert!(conn.is_useful_effect());
        assert_eq!(conn.from_block(), Some(5));
        assert_approx_eq!(conn.exergy_value(), 95.0);

        assert_eq!(
            block.prepare_for_calculation(&mut table),
            Err(Error::invariant_violation(
                "Alternator:5 has already been calculated."
            ))
        );
        assert_eq!(table.len(), 6);
        Ok(())
    }

    #[test]
    fn test_export_xml_connection_list() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = alternator(5, 0.9);
        block.add_connection(table.find_connection_by_index_mut(1), true, Some(0))?;
        block.add_connection(table.find_connection_by_index_mut(4), false, Some(0))?;
        block.add_connection(table.find_connection_by_index_mut(2), true, None)?;
        block.add_connection(table.find_connection_by_index_mut(3), false, None)?;
        block.prepare_for_calculation(&mut table)?;

        let expected = XmlElement::new("Connections")
            .with_child(
                XmlElement::new("MechanicalConnections")
                    .with_child(XmlElement::new("input").with_attribute("index", 1))
                    .with_child(XmlElement::new("output").with_attribute("index", 4)),
            )
            .with_child(
                XmlElement::new("ElectricalConnections")
                    .with_child(XmlElement::new("input").with_attribute("index", 2))
                    .with_child(XmlElement::new("output").with_attribute("index", 3)),
            );
        assert_eq!(block.export_xml_connection_list(&table), expected);
        Ok(())
    }

    #[test]
    fn test_append_xml_connection_list() -> Result<(), Error> {
        let mut table = table()?;
        let element = XmlElement::new("Connections")
            .with_child(
                XmlElement::new("MechanicalConnections")
                    .with_child(XmlElement::new("input").with_attribute("index", 1))
                    .with_child(XmlElement::new("input").with_attribute("index", 12)),
            )
            .with_child(
                XmlElement::new("ElectricalConnections")
                    .with_child(XmlElement::new("output").with_attribute("index", 3)),
            );

        let mut block = alternator(5, 1.0);
        block.append_xml_connection_list(&element, &mut table, false)?;
        assert_eq!(block.support_block().unwrap().input_connections(), &[1]);
        assert_eq!(block.output_connections(), &[3]);
        assert_eq!(block.export_xml_connection_list(&table).children().count(), 2);

        let mut strict = alternator(6, 1.0);
        assert_eq!(
            strict
                .append_xml_connection_list(&element, &mut table, true)
                .err(),
            Some(Error::connection_not_found(
                "Connection with index 12 not found, referenced by block 6."
            ))
        );
        // nothing was registered before the miss was found.
        assert_eq!(strict.state(), BlockState::Created);
        assert_eq!(table.find_connection_by_index(1).unwrap().to_block(), Some(5));

        let mut pipe = generic(8);
        assert_eq!(
            pipe.append_xml_connection_list(&element, &mut table, false)
                .err(),
            Some(Error::xml(
                "Unknown connection family <MechanicalConnections> for Generic:8."
            ))
        );
        Ok(())
    }

    #[test]
    fn test_append_excel_connection_list() -> Result<(), Error> {
        let mut table = table()?;
        let mut block = alternator(5, 1.0);

        let cells: Vec<TableCell> = vec!["0.8".into(), 3.into(), (-1).into(), (-9).into()];
        block.append_excel_connection_list(&cells, &mut table, false)?;

        let efficiency = block.export_xml_other_parameters();
        assert_eq!(efficiency.attribute("efficiency"), Some("0.8"));
        assert_eq!(block.output_connections(), &[3]);
        assert!(block.input_connections().is_empty());
        assert_eq!(block.support_block().unwrap().input_connections(), &[1]);

        let mut pipe = generic(8);
        pipe.append_excel_connection_list(&[2.into(), (-4).into()], &mut table, false)?;
        assert_eq!(pipe.output_connections(), &[2]);
        assert_eq!(pipe.input_connections(), &[4]);

        let mut broken = generic(9);
        assert!(broken
            .append_excel_connection_list(&["x".into()], &mut table, false)
            .is_err());
        assert_eq!(broken.state(), BlockState::Created);

        let mut rejected = alternator(10, 0.9);
        assert_eq!(
            rejected
                .append_excel_connection_list(
                    &["0.5".into(), 2.into(), "x".into()],
                    &mut table,
                    false
                )
                .err(),
            Some(Error::parse("Not a number: \"x\""))
        );
        assert_eq!(
            rejected
                .append_excel_connection_list(
                    &["0.5".into(), (-4).into(), (-12).into()],
                    &mut table,
                    true
                )
                .err(),
            Some(Error::connection_not_found(
                "Connection with index 12 not found, referenced by block 10."
            ))
        );
        assert_eq!(
            rejected.export_xml_other_parameters().attribute("efficiency"),
            Some("0.9")
        );
        assert_eq!(rejected.state(), BlockState::Created);
        assert_eq!(table.find_connection_by_index(2).unwrap().from_block(), Some(8));
        assert_eq!(table.find_connection_by_index(4).unwrap().to_block(), Some(8));
        Ok(())
    }

    #[test]
    fn test_can_be_removed_in_pf_definition() {
        let config = NetworkConfig::default();
        assert!(generic(1).can_be_removed_in_pf_definition(&config));
        assert!(!alternator(2, 1.0).can_be_removed_in_pf_definition(&config));

        let pinned = NetworkConfig {
            pin_blocks_in_pf_definition: true,
            ..Default::default()
        };
        assert!(!generic(1).can_be_removed_in_pf_definition(&pinned));
    }

    #[test]
    fn test_zone_connections() {
        assert!(generic(1)
            .return_other_zone_connections(ZoneType::Pressure, 1)
            .is_empty());
        assert!(alternator(2, 1.0)
            .return_other_zone_connections(ZoneType::FlowRate, 1)
            .is_empty());
    }
}
