//! Static type metadata.
//!
//! A [`TypeDescriptor`] is what a library tells the registry about one of its
//! elements: which parameters it reads, which ports it exposes, which
//! sub-component slots it offers and which statistics it can record. Descriptors
//! are immutable once registered and shared by reference.

use std::collections::BTreeSet ;

use crate::port_pattern::{ self, PortPattern };

/// Static metadata about a registered element type.
#[derive( Debug, Clone, Default )]
pub struct TypeDescriptor {
	/// Human-readable summary shown in listings
	description: String,
	/// Parameter keys the element is allowed to read
	params: BTreeSet<String>,
	/// Port-name patterns, checked in declaration order
	ports: Vec<PortPattern>,
	/// Named slots the element fills with sub-components
	slots: Vec<SlotInfo>,
	/// Statistics the element can record
	statistics: Vec<StatisticInfo>,
}

impl TypeDescriptor {

	/// Creates an empty descriptor.
	pub fn new( description: impl Into<String> ) -> Self {
		Self { description: description.into(), ..Self::default() }
	}

	/// Declares parameter keys.
	pub fn with_params( mut self, params: impl IntoIterator<Item = impl Into<String>> ) -> Self {
		self.params.extend( params.into_iter().map( Into::into ));
		self
	}

	/// Declares port patterns. See [`port_pattern`] for the grammar.
	pub fn with_ports( mut self, ports: impl IntoIterator<Item = impl Into<PortPattern>> ) -> Self {
		self.ports.extend( ports.into_iter().map( Into::into ));
		self
	}

	/// Declares a sub-component slot.
	pub fn with_slot( mut self, name: impl Into<String>, description: impl Into<String> ) -> Self {
		self.slots.push( SlotInfo { name: name.into(), description: description.into() });
		self
	}

	/// Declares a statistic.
	pub fn with_statistic( mut self, statistic: StatisticInfo ) -> Self {
		self.statistics.push( statistic );
		self
	}

	#[inline] pub fn description( &self ) -> &str { &self.description }
	#[inline] pub fn params( &self ) -> &BTreeSet<String> { &self.params }
	#[inline] pub fn ports( &self ) -> &[PortPattern] { &self.ports }
	#[inline] pub fn slots( &self ) -> &[SlotInfo] { &self.slots }
	#[inline] pub fn statistics( &self ) -> &[StatisticInfo] { &self.statistics }

	/// Returns `true` if `port` matches any declared port pattern.
	pub fn accepts_port( &self, port: &str ) -> bool {
		port_pattern::matches_any( &self.ports, port )
	}

	/// Looks up a declared statistic by name.
	pub fn statistic( &self, name: &str ) -> Option<&StatisticInfo> {
		self.statistics.iter().find(| statistic | statistic.name == name )
	}

	/// Returns `true` if a slot with this name is declared.
	pub fn has_slot( &self, name: &str ) -> bool {
		self.slots.iter().any(| slot | slot.name == name )
	}

}

/// A named sub-component slot.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct SlotInfo {
	name: String,
	description: String,
}

impl SlotInfo {
	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn description( &self ) -> &str { &self.description }
}

/// A statistic an element can record.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct StatisticInfo {
	name: String,
	/// Minimum statistic level at which this statistic is enabled by default
	enable_level: u8,
	units: String,
}

impl StatisticInfo {

	pub fn new( name: impl Into<String>, enable_level: u8, units: impl Into<String> ) -> Self {
		Self { name: name.into(), enable_level, units: units.into() }
	}

	#[inline] pub fn name( &self ) -> &str { &self.name }
	#[inline] pub fn enable_level( &self ) -> u8 { self.enable_level }
	#[inline] pub fn units( &self ) -> &str { &self.units }

}
