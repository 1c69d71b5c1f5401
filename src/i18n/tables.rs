use super::TranslationKey::{self, *};

pub(super) const EN: &[(TranslationKey, &str)] = &[
    (Home, "Home"),
    (About, "About"),
    (Events, "Events"),
    (Profile, "Profile"),
    (SignIn, "Sign In"),
    (SignUp, "Sign Up"),
    (SignOut, "Sign Out"),
    (Feed, "Feed"),
    (Pricing, "Pricing"),
    (Dashboard, "Dashboard"),
    (HeroTitle, "Discover Amazing Events"),
    (HeroSubtitle, "Find and attend the best events happening around you"),
    (SearchPlaceholder, "Search events, locations, or categories..."),
    (SponsoredEvents, "Sponsored Events"),
    (PopularEvents, "Popular Events"),
    (Categories, "Categories"),
    (AllCategories, "All Categories"),
    (Theater, "Theater"),
    (Ballet, "Ballet"),
    (Opera, "Opera"),
    (Arts, "Arts"),
    (Music, "Music"),
    (Comedy, "Comedy"),
    (Drama, "Drama"),
    (Klassisk, "Classical"),
    (Fotografi, "Photography"),
    (Skulptur, "Sculpture"),
    (Samtidskonst, "Contemporary Art"),
    (Jazz, "Jazz"),
    (Standup, "Stand-up"),
    (Musikal, "Musical"),
    (Filters, "Filters"),
    (SearchResults, "Search Results"),
    (NoEventsFound, "No events found"),
    (AllLocations, "All Locations"),
    (Genre, "Genre"),
    (AllGenres, "All Genres"),
    (AllDates, "All Dates"),
    (Today, "Today"),
    (ThisWeek, "This Week"),
    (ThisMonth, "This Month"),
    (EventDetails, "Event Details"),
    (Date, "Date"),
    (Time, "Time"),
    (Location, "Location"),
    (Price, "Price"),
    (Free, "Free"),
    (Organizer, "Organizer"),
    (Attendees, "Attendees"),
    (SaveEvent, "Save Event"),
    (ShareEvent, "Share"),
    (Follow, "Follow"),
    (Unfollow, "Unfollow"),
    (EditProfile, "Edit Profile"),
    (Followers, "Followers"),
    (Following, "Following"),
    (CreateEvent, "Create Event"),
    (EditEvent, "Edit Event"),
    (NoPaidPlan, "Editing events requires a paid plan"),
    (UpgradeToPro, "Upgrade to Pro"),
    (Pro, "Pro"),
    (Like, "Like"),
    (Comment, "Comment"),
    (TitleRequired, "Title is required"),
    (DescriptionRequired, "Description is required"),
    (GenreRequired, "Genre is required"),
    (CategoryRequired, "Category is required"),
    (LocationRequired, "Location is required"),
    (DateRequired, "Date is required"),
    (TimeRequired, "Time is required"),
    (PriceRequired, "Price is required"),
    (InvalidCategory, "Unknown category"),
    (InvalidDate, "Date must be YYYY-MM-DD"),
    (InvalidTime, "Time must be HH:MM"),
    (InvalidPrice, "Price must be zero or more"),
    (NameRequired, "Name is required"),
    (EmailRequired, "Email is required"),
    (InvalidEmail, "Email address is invalid"),
    (PasswordRequired, "Password is required"),
];

pub(super) const SV: &[(TranslationKey, &str)] = &[
    (Home, "Hem"),
    (About, "Om oss"),
    (Events, "Evenemang"),
    (Profile, "Profil"),
    (SignIn, "Logga in"),
    (SignUp, "Registrera"),
    (SignOut, "Logga ut"),
    (Feed, "Flöde"),
    (Pricing, "Priser"),
    (Dashboard, "Dashboard"),
    (HeroTitle, "Upptäck Fantastiska Event"),
    (HeroSubtitle, "Hitta och delta i de bästa evenemangen runt dig"),
    (SearchPlaceholder, "Sök evenemang, platser eller kategorier..."),
    (SponsoredEvents, "Sponsrade Evenemang"),
    (PopularEvents, "Populära Evenemang"),
    (Categories, "Kategorier"),
    (AllCategories, "Alla kategorier"),
    (Theater, "Teater"),
    (Ballet, "Balett"),
    (Opera, "Opera"),
    (Arts, "Konst"),
    (Music, "Musik"),
    (Comedy, "Komedi"),
    (Drama, "Drama"),
    (Klassisk, "Klassisk"),
    (Fotografi, "Fotografi"),
    (Skulptur, "Skulptur"),
    (Samtidskonst, "Samtidskonst"),
    (Jazz, "Jazz"),
    (Standup, "Stand-up"),
    (Musikal, "Musikal"),
    (Filters, "Filter"),
    (SearchResults, "Sökresultat"),
    (NoEventsFound, "Inga evenemang hittades"),
    (AllLocations, "Alla platser"),
    (Genre, "Genre"),
    (AllGenres, "Alla genrer"),
    (AllDates, "Alla datum"),
    (Today, "Idag"),
    (ThisWeek, "Denna vecka"),
    (ThisMonth, "Denna månad"),
    (EventDetails, "Eventdetaljer"),
    (Date, "Datum"),
    (Time, "Tid"),
    (Location, "Plats"),
    (Price, "Pris"),
    (Free, "Gratis"),
    (Organizer, "Arrangör"),
    (Attendees, "Deltagare"),
    (SaveEvent, "Spara Event"),
    (ShareEvent, "Dela"),
    (Follow, "Följ"),
    (Unfollow, "Sluta följa"),
    (EditProfile, "Redigera Profil"),
    (Followers, "Följare"),
    (Following, "Följer"),
    (CreateEvent, "Skapa Event"),
    (EditEvent, "Redigera Event"),
    (NoPaidPlan, "Redigera evenemang kräver en betald plan"),
    (UpgradeToPro, "Uppgradera till Pro"),
    (Pro, "Pro"),
    (Like, "Gilla"),
    (Comment, "Kommentera"),
    (TitleRequired, "Titel krävs"),
    (DescriptionRequired, "Beskrivning krävs"),
    (GenreRequired, "Genre krävs"),
    (CategoryRequired, "Kategori krävs"),
    (LocationRequired, "Plats krävs"),
    (DateRequired, "Datum krävs"),
    (TimeRequired, "Tid krävs"),
    (PriceRequired, "Pris krävs"),
    (InvalidCategory, "Okänd kategori"),
    (InvalidDate, "Datum måste anges som ÅÅÅÅ-MM-DD"),
    (InvalidTime, "Tid måste anges som TT:MM"),
    (InvalidPrice, "Pris får inte vara negativt"),
    (NameRequired, "Namn krävs"),
    (EmailRequired, "E-post krävs"),
    (InvalidEmail, "Ogiltig e-postadress"),
    (PasswordRequired, "Lösenord krävs"),
];
