use crate::fixtures ;

#[test]
fn library_loads_exactly_once() {

	let ( factory, calls ) = fixtures::factory();

	assert!( factory.find_library( fixtures::LIBRARY, true ));
	assert!( factory.find_library( fixtures::LIBRARY, true ));
	assert_eq!( fixtures::calls( &calls ), 1 );

	assert!( factory.has_library( fixtures::LIBRARY ));
	factory.require_library( fixtures::LIBRARY );
	assert_eq!( fixtures::calls( &calls ), 1 );

}

#[test]
fn loaded_set_grows_and_stays_sorted() {

	let ( factory, _ ) = fixtures::factory();
	assert_eq!( factory.loaded_library_names(), vec![ "sst".to_string() ]);

	factory.require_library( fixtures::LIBRARY );
	factory.require_library( "empty" );
	assert_eq!( factory.loaded_library_names(), vec![ "empty", "fixture", "sst" ]);

}

#[test]
fn unloaded_libraries_are_brought_up_to_date() {

	let ( factory, calls ) = fixtures::factory();
	factory.require_library( fixtures::LIBRARY );

	factory.load_unloaded_libraries([ "fixture", "empty", "missing" ]);

	// "fixture" was already loaded; "empty" and "missing" each cost one attempt.
	assert_eq!( fixtures::calls( &calls ), 3 );
	assert_eq!( factory.loaded_library_names(), vec![ "empty", "fixture", "sst" ]);

}

#[test]
fn require_event_loads_the_event_library() {
	let ( factory, calls ) = fixtures::factory();
	factory.require_event( "fixture.MemEvent" );
	factory.require_event( "fixture.OtherEvent" );
	assert_eq!( fixtures::calls( &calls ), 1 );
	assert!( factory.loaded_library_names().contains( &"fixture".to_string() ));
}
