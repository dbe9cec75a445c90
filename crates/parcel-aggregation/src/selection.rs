use parcel_core::config::RoutingConfig;
use parcel_core::errors::ValidationError;
use parcel_core::models::{PortalSelector, PropertyType, SearchQuery, SourceId};

/// Decide which registered portals a query reaches, in call order.
///
/// A specific selector yields exactly that portal. `auto` yields every
/// registered portal in the configured default order (unlisted ones last),
/// then moves one preferred source to the front without dropping any:
/// the rural-preferred source for rural queries, otherwise the source with
/// an affinity for the query's state.
pub fn select_sources(
    query: &SearchQuery,
    routing: &RoutingConfig,
    registered: &[SourceId],
) -> Result<Vec<SourceId>, ValidationError> {
    if let PortalSelector::Specific(source) = query.portal_selector {
        return if registered.contains(&source) {
            Ok(vec![source])
        } else {
            Err(ValidationError::UnknownPortal {
                portal: source.to_string(),
            })
        };
    }

    let mut order: Vec<SourceId> = routing
        .default_order
        .iter()
        .copied()
        .filter(|s| registered.contains(s))
        .collect();
    for source in registered {
        if !order.contains(source) {
            order.push(*source);
        }
    }

    let preferred = if query.property_type == PropertyType::Rural {
        routing.rural_preferred
    } else {
        None
    }
    .or_else(|| {
        routing
            .state_affinity
            .get(&query.address.state.trim().to_lowercase())
            .copied()
    });

    if let Some(front) = preferred {
        if let Some(pos) = order.iter().position(|s| *s == front) {
            let source = order.remove(pos);
            order.insert(0, source);
        }
    }

    Ok(order)
}
