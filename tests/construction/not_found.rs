use std::process::{ Command, Output };
use element_factory::{ Capability, ComponentId, Factory, FactoryError, LinkMap, Params, QualifiedName };

use crate::fixtures ;

#[test]
fn unknown_component_lists_alternatives() {

	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 0 );
	let mut links = LinkMap::new( id );

	match factory.try_create_component( id, "fixture.gpu", &mut Params::new(), &mut links ) {
		Err( FactoryError::ElementNotFound { capability, name, alternatives, sibling }) => {
			assert_eq!( capability, Capability::Component );
			assert_eq!( name, QualifiedName::new( "fixture", "gpu" ));
			assert_eq!( alternatives, vec![ "core", "faulty", "leaf", "wrapper" ]);
			assert_eq!( sibling, Some(( Capability::SubComponent, vec![ "cache".to_string() ])));
		},
		Err( other ) => panic!( "Unexpected error: {}", other ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

	// No ports were installed for a type that does not exist.
	assert!( links.is_port_allowed( "anything" ));

}

#[test]
fn sub_component_requested_as_component_shows_sibling_listing() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 0 );
	let error = factory
		.try_create_component( id, "fixture.cache", &mut Params::new(), &mut LinkMap::new( id ))
		.err()
		.expect( "Expected failure" );
	let message = error.to_string();
	assert!( message.contains( "valid components:" ), "{}", message );
	assert!( message.contains( "valid subcomponents:\n    cache" ), "{}", message );
}

#[test]
fn library_without_elements_says_so() {
	let ( factory, _ ) = fixtures::factory();
	let error = factory.try_create_module( "empty.anything", &mut Params::new() ).err().expect( "Expected failure" );
	assert!( error.to_string().contains( "no modules registered by this library" ), "{}", error );
}

#[test]
#[should_panic( expected = "can't find requested component 'fixture.gpu'" )]
fn unknown_component_is_fatal() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 0 );
	factory.create_component( id, "fixture.gpu", &mut Params::new(), &mut LinkMap::new( id ));
}

#[test]
#[should_panic( expected = "can't find requested element library 'nolib'" )]
fn component_from_unknown_library_is_fatal() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 0 );
	factory.create_component( id, "nolib.gpu", &mut Params::new(), &mut LinkMap::new( id ));
}

#[test]
fn bare_name_is_reported_as_written() {
	let ( factory, _ ) = fixtures::factory();
	let id = ComponentId::new( 0 );
	let error = factory
		.try_create_component( id, "fixture", &mut Params::new(), &mut LinkMap::new( id ))
		.err()
		.expect( "Expected failure" );
	assert!( error.to_string().starts_with( "can't find requested component 'fixture'\n" ), "{}", error );
}

/// Set when the test binary is re-run to let the default sink terminate it.
const EXIT_CHILD: &str = "ELEMENT_FACTORY_EXIT_CHILD" ;
const UNKNOWN_COMPONENT: &str = "can't find requested component 'fixture.gpu'" ;

/// Requests an unknown component through a factory using the default sink.
fn request_unknown_component() {
	let factory = Factory::new( "/opt/elements", fixtures::LOADER.clone() );
	let id = ComponentId::new( 0 );
	factory.create_component( id, "fixture.gpu", &mut Params::new(), &mut LinkMap::new( id ));
}

/// Re-runs the single test `test` of this binary in a child process.
fn rerun( test: &str ) -> Output {
	Command::new( std::env::current_exe().expect( "test binary path" ))
		.args([ "--exact", test, "--nocapture", "--test-threads", "1" ])
		.env( EXIT_CHILD, "1" )
		.output()
		.expect( "failed to re-run the test binary" )
}

#[test]
fn default_sink_exits_with_failure_status() {

	if std::env::var_os( EXIT_CHILD ).is_some() { return request_unknown_component() }

	let output = rerun( "construction::not_found::default_sink_exits_with_failure_status" );
	let stderr = String::from_utf8_lossy( &output.stderr );

	assert!( !output.status.success() );
	assert_eq!( output.status.code(), Some( 1 ), "{}", stderr );
	assert_eq!( stderr.matches( UNKNOWN_COMPONENT ).count(), 1, "{}", stderr );
	assert!( stderr.contains( "FATAL: " ), "{}", stderr );

}

#[test]
fn default_sink_reports_once_through_tracing() {

	if std::env::var_os( EXIT_CHILD ).is_some() {
		let subscriber = tracing_subscriber::fmt()
			.with_writer( std::io::stderr )
			.with_ansi( false )
			.finish();
		return tracing::subscriber::with_default( subscriber, request_unknown_component )
	}

	let output = rerun( "construction::not_found::default_sink_reports_once_through_tracing" );
	let stderr = String::from_utf8_lossy( &output.stderr );

	assert_eq!( output.status.code(), Some( 1 ), "{}", stderr );
	assert_eq!( stderr.matches( UNKNOWN_COMPONENT ).count(), 1, "{}", stderr );
	assert!( stderr.contains( "ERROR" ), "{}", stderr );
	assert!( !stderr.contains( "FATAL: " ), "{}", stderr );

}
