//! A sensor counting active alerts of one category.

use crate::prelude::*;

pub struct AlertSensor {
    coordinator: Arc<Coordinator>,
    settings: Arc<Settings>,
    alert_type: AlertType,
}

/// Alert count along with the alert titles and issue times.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertReading {
    pub count: usize,
    pub attributes: Attributes,
}

impl AlertSensor {
    pub fn new(coordinator: Arc<Coordinator>, settings: Arc<Settings>, alert_type: AlertType) -> Self {
        Self {
            coordinator,
            settings,
            alert_type,
        }
    }

    /// Reads the count and the attributes from the same snapshot.
    pub fn read(&self) -> AlertReading {
        let data = self.coordinator.data();
        let alerts = data.alerts(self.alert_type.key);
        let mut attributes = Attributes::with_capacity(2 * alerts.len());
        for (index, alert) in alerts.iter().enumerate() {
            attributes.push((format!("alert {}", index + 1), alert.title.clone()));
            attributes.push((format!("alert_time {}", index + 1), alert.date.clone()));
        }
        AlertReading {
            count: alerts.len(),
            attributes,
        }
    }
}

impl Entity for AlertSensor {
    fn name(&self) -> String {
        format!("{} {} Alerts", self.settings.display_name(), self.alert_type.label)
    }

    fn unique_id(&self) -> String {
        self.settings.unique_id(self.alert_type.key)
    }

    fn state(&self) -> Option<Value> {
        Some(Value::Integer(self.read().count as i64))
    }

    fn extra_state_attributes(&self) -> Option<Attributes> {
        Some(self.read().attributes)
    }
}
