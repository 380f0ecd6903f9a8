use super::{AppError, BaseRequest, RequestDocument, RouteItem, StatRequest, StatResponse};
use crate::config::{BusnetConfiguration, RoutingSettings, SerializationSettings};
use crate::model::persistence::{self, Snapshot};
use crate::model::router::{ItineraryStep, TransportRouter};
use busnet_catalogue::catalogue::{CatalogueError, TransportCatalogue};
use busnet_catalogue::model::{RouteKind, Stop};
use itertools::Itertools;

/// adds all stops, then all road distances, then all bus routes, so requests
/// may reference stops listed later in the document.
pub fn apply_base_requests(
    catalogue: &mut TransportCatalogue,
    requests: &[BaseRequest],
) -> Result<(), CatalogueError> {
    for request in requests.iter() {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(Stop::new(name, *latitude, *longitude))?;
        }
    }
    for request in requests.iter() {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (neighbor, meters) in road_distances.iter() {
                catalogue.set_distance(name, neighbor, *meters)?;
            }
        }
    }
    for request in requests.iter() {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_route(name, RouteKind::from_roundtrip(*is_roundtrip), stops.as_slice())?;
        }
    }
    log::info!(
        "catalogue holds {} stops and {} routes",
        catalogue.stops().len(),
        catalogue.routes().len()
    );
    Ok(())
}

/// answers each request in order. anything that cannot be answered becomes a
/// not found response for that request id.
pub fn answer_stat_requests(
    catalogue: &TransportCatalogue,
    router: &TransportRouter,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| answer_stat_request(catalogue, router, request))
        .collect_vec()
}

fn answer_stat_request(
    catalogue: &TransportCatalogue,
    router: &TransportRouter,
    request: &StatRequest,
) -> StatResponse {
    let request_id = request.id();
    let response = match request {
        StatRequest::Bus { name, .. } => catalogue
            .route_stats(name)
            .map(|stats| StatResponse::bus(request_id, &stats)),
        StatRequest::Stop { name, .. } => {
            catalogue
                .routes_at_stop(name)
                .map(|routes| StatResponse::Stop {
                    request_id,
                    buses: routes.iter().cloned().collect_vec(),
                })
        }
        StatRequest::Route { from, to, .. } => {
            router
                .find_fastest_itinerary(from, to)
                .map(|itinerary| StatResponse::Route {
                    request_id,
                    total_time: itinerary.total_time,
                    items: itinerary.steps.into_iter().map(RouteItem::from).collect_vec(),
                })
        }
        StatRequest::Map { .. } => {
            log::warn!("request {request_id}: map rendering is not supported");
            None
        }
    };
    response.unwrap_or_else(|| StatResponse::not_found(request_id))
}

impl From<ItineraryStep> for RouteItem {
    fn from(step: ItineraryStep) -> Self {
        match step {
            ItineraryStep::Wait { stop_name, time } => RouteItem::Wait { stop_name, time },
            ItineraryStep::Ride {
                route_name,
                span_count,
                time,
            } => RouteItem::Bus {
                bus: route_name,
                span_count,
                time,
            },
        }
    }
}

/// builds the catalogue and router described by the base requests and saves
/// them to the file named in the serialization settings.
pub fn make_base(
    document: &RequestDocument,
    conf: &BusnetConfiguration,
    overwrite: bool,
) -> Result<(), AppError> {
    let routing_settings = routing_settings(document, conf)?;
    let serialization_settings = serialization_settings(document, conf)?;

    let mut catalogue = TransportCatalogue::new();
    apply_base_requests(&mut catalogue, &document.base_requests)?;
    let router = TransportRouter::build(&catalogue, routing_settings)?;
    let snapshot = Snapshot::new(&catalogue, &router);
    persistence::save_to_file(&serialization_settings.file, &snapshot, overwrite)?;
    Ok(())
}

/// loads the base saved by [`make_base`] and answers the stat requests.
pub fn process_requests(
    document: &RequestDocument,
    conf: &BusnetConfiguration,
) -> Result<Vec<StatResponse>, AppError> {
    let serialization_settings = serialization_settings(document, conf)?;
    let snapshot = persistence::load_from_file(&serialization_settings.file)?;
    let (catalogue, router) = snapshot.restore()?;
    let responses = answer_stat_requests(&catalogue, &router, &document.stat_requests);
    log::info!("answered {} requests", responses.len());
    Ok(responses)
}

fn routing_settings(
    document: &RequestDocument,
    conf: &BusnetConfiguration,
) -> Result<RoutingSettings, AppError> {
    document
        .routing_settings
        .or(conf.routing_settings)
        .ok_or_else(|| {
            AppError::ConfigurationError(String::from(
                "routing_settings missing from both request document and configuration",
            ))
        })
}

fn serialization_settings(
    document: &RequestDocument,
    conf: &BusnetConfiguration,
) -> Result<SerializationSettings, AppError> {
    document
        .serialization_settings
        .clone()
        .or_else(|| conf.serialization_settings.clone())
        .ok_or_else(|| {
            AppError::ConfigurationError(String::from(
                "serialization_settings missing from both request document and configuration",
            ))
        })
}
