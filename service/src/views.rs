use abi::{Booking, BookingId, Error, RowsCount, Zone};
use booking::Bookings;
use tracing::info;

use crate::{
    form::{BookingForm, SaveOutcome},
    pager::Pager,
    route::Route,
};

/// One entry of the booking list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: BookingId,
    pub title: String,
    pub host_name: String,
    pub date: Option<String>,
    pub link: Route,
}

/// The `/` view: fetches every booking once and pages through them locally.
#[derive(Debug)]
pub struct ListView<B> {
    api: B,
    pager: Pager<Booking>,
    zone: Zone,
}

impl<B: Bookings + Sync> ListView<B> {
    pub fn new(api: B, rows_count: RowsCount, zone: Zone) -> Self {
        Self {
            api,
            pager: Pager::new(rows_count),
            zone,
        }
    }

    pub async fn mount(&mut self) -> Result<(), Error> {
        let bookings = self.api.list().await?;
        info!(count = bookings.len(), "bookings loaded");
        self.pager.initialize(bookings);
        Ok(())
    }

    pub fn pager(&self) -> &Pager<Booking> {
        &self.pager
    }

    pub fn change_page(&mut self, page: usize) {
        self.pager.change_page(page);
    }

    pub fn change_rows_count(&mut self, rows_count: RowsCount) {
        self.pager.change_rows_count(rows_count);
    }

    pub fn rows(&self) -> Vec<BookingRow> {
        self.pager
            .visible()
            .iter()
            .map(|b| BookingRow {
                id: b.id.clone(),
                title: format!("{} #{}", b.room_name, b.id),
                host_name: b.host_name.clone(),
                date: b.booking_date.as_ref().map(|d| self.zone.date_label(d)),
                link: Route::Room(b.id.clone()),
            })
            .collect()
    }
}

/// The `/rooms/:id` view.
#[derive(Debug)]
pub struct DetailView<B> {
    api: B,
    id: BookingId,
    form: BookingForm,
}

impl<B: Bookings + Sync> DetailView<B> {
    pub fn new(api: B, id: impl Into<BookingId>, zone: Zone) -> Self {
        Self {
            api,
            id: id.into(),
            form: BookingForm::new(zone),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn mount(&mut self) -> Result<(), Error> {
        let booking = self.api.get(&self.id).await?;
        self.form.load(&booking);
        Ok(())
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub async fn save(&mut self) -> Result<SaveOutcome, Error> {
        self.form.save(&self.api, &self.id).await
    }
}
