use element_factory::{ FactoryError, LibraryLoader, SearchPaths, TypeRegistry, TypeDescriptor };

use crate::fixtures ;

/// Claims every load succeeded without registering anything.
struct OverclaimingLoader ;

impl LibraryLoader for OverclaimingLoader {
	fn load_library( &self, _: &str, _: &SearchPaths, _: &TypeRegistry, _: bool ) -> bool { true }
}

/// Registers the library but reports failure, as a library registering from a
/// static initializer might.
struct UnderclaimingLoader ;

impl LibraryLoader for UnderclaimingLoader {
	fn load_library( &self, name: &str, _: &SearchPaths, registry: &TypeRegistry, _: bool ) -> bool {
		registry.register_library( name, | library | {
			library.module( "noop", TypeDescriptor::new( "" ), | _, _ | unreachable!() );
		});
		false
	}
}

#[test]
fn loader_success_is_verified_against_registry() {

	let ( factory, calls ) = fixtures::factory_with( OverclaimingLoader );

	assert!( !factory.find_library( "ghost", true ));
	assert!( !factory.find_library( "ghost", true ));

	// Unverified loads are not recorded, so every attempt reaches the loader.
	assert_eq!( fixtures::calls( &calls ), 2 );
	assert_eq!( factory.loaded_library_names(), vec![ "sst" ]);

}

#[test]
fn registration_counts_even_when_loader_reports_failure() {
	let ( factory, calls ) = fixtures::factory_with( UnderclaimingLoader );
	assert!( factory.find_library( "eager", true ));
	assert!( factory.find_library( "eager", true ));
	assert_eq!( fixtures::calls( &calls ), 1 );
}

#[test]
fn missing_library_reports_search_paths() {

	let ( factory, _ ) = fixtures::factory();

	match factory.try_require_library( "missing" ) {
		Err( FactoryError::LibraryNotFound { library, search_paths }) => {
			assert_eq!( library, "missing" );
			assert_eq!( search_paths.to_string(), "/opt/elements" );
		},
		other => panic!( "Expected LibraryNotFound, got {:?}", other ),
	}

}

#[test]
#[should_panic( expected = "can't find requested element library 'missing'" )]
fn missing_required_library_is_fatal() {
	let ( factory, _ ) = fixtures::factory();
	factory.require_library( "missing" );
}
