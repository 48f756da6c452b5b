//! About tab

pub fn about_tab() -> String {
    String::from(
        r#"<h3>About PetMatch</h3>
<p>PetMatch helps you find your perfect pet companion from thousands of adoptable animals across the country.</p>
<p><strong>How to use PetMatch:</strong></p>
<ol>
<li>Search for pets based on your preferences and location</li>
<li>Browse through the results and click "View Details" to learn more about each pet</li>
<li>Add pets to your favorites to keep track of the ones you're interested in</li>
<li>Contact the shelter or rescue organization directly using the provided information</li>
</ol>
<p><strong>Data Source:</strong><br>
PetMatch uses the Petfinder API to provide up-to-date information on adoptable pets. Petfinder is North America's largest adoption website with hundreds of thousands of adoptable pets listed by more than 11,500 animal shelters and rescue organizations.</p>
<p><strong>Privacy:</strong><br>
PetMatch does not store any personal information or search history. Your favorites are kept only for the lifetime of your browser session and are not shared with any third parties.</p>
"#,
    )
}
